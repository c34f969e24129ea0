use tracing::info;

/// Receives a notification as each pipeline stage starts.
///
/// `step` is 1-based; `total` counts every stage of the run.
pub trait StageObserver: Send + Sync {
    fn on_stage(&self, step: usize, total: usize, stage: &str);
}

/// Logs each stage at info level
#[derive(Debug, Clone, Copy)]
pub struct LoggingObserver {
    component: &'static str,
}

impl LoggingObserver {
    #[must_use]
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new("Preprocessor")
    }
}

impl StageObserver for LoggingObserver {
    fn on_stage(&self, step: usize, total: usize, stage: &str) {
        info!("[{}] (step {step} of {total}): {stage}", self.component);
    }
}

/// Ignores all stages
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl StageObserver for SilentObserver {
    fn on_stage(&self, _step: usize, _total: usize, _stage: &str) {}
}
