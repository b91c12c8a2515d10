use archviz::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock Notifier for testing that captures notifications
#[derive(Default, Clone)]
pub struct MockNotifier {
    pub notifications: Arc<Mutex<Vec<Notification>>>,
    pub waits: Arc<Mutex<Vec<String>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }

    pub fn wait_count(&self) -> usize {
        self.waits.lock().unwrap().len()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notification: &Notification) {
        self.notifications.lock().unwrap().push(notification.clone());
    }

    fn start_waiting(&self, message: &str) {
        self.waits.lock().unwrap().push(message.to_string());
    }

    fn stop_waiting(&self) {}
}
