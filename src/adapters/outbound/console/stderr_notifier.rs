use crate::ports::outbound::{Notification, NotificationLevel, Notifier};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

/// StderrNotifier adapter for user notifications on the terminal
///
/// Writes to stderr so notifications never mix with diagram text or images
/// sent to stdout. A spinner is shown while waiting on the rendering service.
pub struct StderrNotifier {
    spinner: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrNotifier {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
            quiet: false,
        }
    }

    /// Notifier that only prints errors and never shows a spinner
    pub fn quiet() -> Self {
        Self {
            spinner: RefCell::new(None),
            quiet: true,
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for StderrNotifier {
    fn notify(&self, notification: &Notification) {
        self.clear_spinner();
        match notification.level {
            NotificationLevel::Success if self.quiet => {}
            NotificationLevel::Success => eprintln!(
                "{} {}: {}",
                "✔".green(),
                notification.title.bold(),
                notification.description
            ),
            NotificationLevel::Error => eprintln!(
                "{} {}: {}",
                "✖".red(),
                notification.title.red().bold(),
                notification.description
            ),
        }
    }

    fn start_waiting(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.clear_spinner();
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn stop_waiting(&self) {
        self.clear_spinner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifier_lifecycle() {
        let notifier = StderrNotifier::new();
        notifier.start_waiting("Rendering diagram");
        assert!(notifier.spinner.borrow().is_some());
        notifier.notify(&Notification::success("Saved", "Component added"));
        assert!(notifier.spinner.borrow().is_none());
        notifier.notify(&Notification::error("Failed", "Duplicate id"));
        notifier.stop_waiting();
    }

    #[test]
    fn test_quiet_notifier_skips_spinner() {
        let notifier = StderrNotifier::quiet();
        notifier.start_waiting("Rendering diagram");
        assert!(notifier.spinner.borrow().is_none());
        notifier.notify(&Notification::success("Saved", "Component added"));
    }
}
