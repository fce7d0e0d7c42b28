//! Host dialog seam
//!
//! The storefront runs inside a chat-platform mini-app container whose only
//! outbound dialog surface is a blocking informational alert: string in,
//! nothing back. Confirmations, receipts and error messages all go through
//! this trait.

/// Blocking informational dialog provided by the host environment
pub trait AlertHost {
    fn show_alert(&self, text: &str);
}

/// Fallback host for running outside the mini-app container
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrHost;

impl AlertHost for StderrHost {
    fn show_alert(&self, text: &str) {
        eprintln!("{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingHost {
        alerts: RefCell<Vec<String>>,
    }

    impl AlertHost for RecordingHost {
        fn show_alert(&self, text: &str) {
            self.alerts.borrow_mut().push(text.to_string());
        }
    }

    #[test]
    fn test_alert_is_fire_and_forget() {
        let host = RecordingHost {
            alerts: RefCell::new(Vec::new()),
        };
        host.show_alert("Your cart is empty");
        assert_eq!(host.alerts.borrow().as_slice(), ["Your cart is empty"]);
    }
}
