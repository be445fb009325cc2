mod progress;
mod styling;

pub use progress::TriggerProgress;
use styling::{bright_green, dim, magenta_bold};

/// Prints the banner to stderr so stdout only carries the result line.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        magenta_bold("🚀 ado-trigger"),
        dim(env!("CARGO_PKG_VERSION")),
        dim("Azure DevOps pipeline trigger")
    );
}

/// Prints the final confirmation line to stdout.
pub fn print_success() {
    println!("{}", bright_green("Pipeline triggered successfully"));
}
