use std::time::Duration;

/// Main loop configuration.
#[derive(Debug, Clone, Default)]
pub struct LoopConfig {
    /// Sleep between drains that came back empty.
    ///
    /// `None` spins without yielding, which keeps one core busy for the
    /// lifetime of the window.
    pub idle_wait: Option<Duration>,
}
