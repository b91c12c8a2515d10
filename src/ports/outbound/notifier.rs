/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A short localized message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Notifier port for user feedback
///
/// Notifications are for the user, not for diagnostics; diagnostics go
/// through the `log` facade.
pub trait Notifier {
    /// Shows a notification
    fn notify(&self, notification: &Notification);

    /// Signals that a long-running operation started
    ///
    /// # Arguments
    /// * `message` - Localized description of what is being waited on
    fn start_waiting(&self, message: &str);

    /// Signals that the operation announced by `start_waiting` ended
    fn stop_waiting(&self);
}
