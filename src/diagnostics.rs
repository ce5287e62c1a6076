use log::{info, warn};

/// Sink for the messages an export run reports while it works.
pub trait Diagnostics {
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn info(&self, message: &str) {
        info!("{}", message);
    }
}
