use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::styling::{bright_green, bright_red, bright_yellow};

/// Spinner shown on stderr while the run request is in flight.
pub struct TriggerProgress {
    pb: ProgressBar,
}

impl TriggerProgress {
    pub fn start(pipeline_id: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        if let Ok(spinner) = ProgressStyle::default_spinner().template("  {msg} {spinner}") {
            pb.set_style(spinner);
        }
        pb.set_message(bright_yellow(format!("Queuing run of pipeline {pipeline_id}")).to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb }
    }

    pub fn succeed(self) {
        self.pb
            .finish_with_message(bright_green("Run queued ✓").to_string());
    }

    pub fn fail(self) {
        self.pb
            .abandon_with_message(bright_red("Run not queued ✗").to_string());
    }
}
