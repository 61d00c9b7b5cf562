use ecard_exporter::notify::{Notifier, Severity};
use std::sync::{Arc, Mutex};

/// Mock notifier for testing.
///
/// Records every notification so tests can assert the exporter notifies
/// exactly once per invocation, after the terminal outcome.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockNotifier {
    notifications: Arc<Mutex<Vec<(String, Severity)>>>,
}

#[allow(dead_code)]
impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications seen so far, in order.
    pub fn notifications(&self) -> Vec<(String, Severity)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    /// Severity of the only notification; panics if there is not exactly one.
    pub fn single_severity(&self) -> Severity {
        let notifications = self.notifications();
        assert_eq!(
            notifications.len(),
            1,
            "expected exactly one notification, got: {:?}",
            notifications
        );
        notifications[0].1
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let mut notifications = self.notifications.lock().unwrap();
        notifications.push((message.to_string(), severity));
    }
}
