//! System service: elapsed time and diagnostics

use crate::gui::interfaces::{LogLevel, SystemInterface};
use crate::platform::ticks::TickSource;

/// [`SystemInterface`] driven by a millisecond [`TickSource`]
pub struct TickSystemInterface<T> {
    ticks: T,
}

impl<T: TickSource> TickSystemInterface<T> {
    /// Create the adapter over a tick source
    pub const fn new(ticks: T) -> Self {
        Self { ticks }
    }

    /// The underlying tick source
    pub const fn ticks(&self) -> &T {
        &self.ticks
    }
}

impl<T: TickSource> SystemInterface for TickSystemInterface<T> {
    // f32 loses millisecond precision after roughly four hours; acceptable for UI animation
    #[allow(clippy::cast_precision_loss)]
    fn elapsed_time(&self) -> f32 {
        self.ticks.ticks() as f32 / 1000.0
    }

    fn log_message(&self, level: LogLevel, message: &str) -> bool {
        match level {
            LogLevel::Always | LogLevel::Info => log::info!(target: "gui", "{}", message),
            LogLevel::Error | LogLevel::Assert => log::error!(target: "gui", "{}", message),
            LogLevel::Warning => log::warn!(target: "gui", "{}", message),
            LogLevel::Debug => log::debug!(target: "gui", "{}", message),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ticks::ManualTicks;
    use approx::assert_relative_eq;

    #[test]
    fn test_elapsed_time_is_ticks_over_thousand() {
        let system = TickSystemInterface::new(ManualTicks::starting_at(0));
        assert_relative_eq!(system.elapsed_time(), 0.0);

        system.ticks().advance(1500);
        assert_relative_eq!(system.elapsed_time(), 1.5);

        system.ticks().advance(250);
        assert_relative_eq!(system.elapsed_time(), 1.75);
    }

    #[test]
    fn test_elapsed_time_non_decreasing() {
        let system = TickSystemInterface::new(ManualTicks::starting_at(0));
        let mut previous = system.elapsed_time();
        for step in [0, 1, 7, 0, 1000, 3, 86_400_000] {
            system.ticks().advance(step);
            let now = system.elapsed_time();
            assert!(now >= previous, "{now} < {previous}");
            previous = now;
        }
    }

    #[test]
    fn test_log_message_continues_and_translate_is_identity() {
        let system = TickSystemInterface::new(ManualTicks::default());
        assert!(system.log_message(LogLevel::Error, "bad rcss"));
        assert!(system.log_message(LogLevel::Debug, "detail"));
        assert_eq!(system.translate_string("Start"), "Start");
    }
}
