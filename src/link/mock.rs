//! # Recording opener
//!
//! A [`LinkOpener`] that remembers every URL instead of opening it.
//!
//! This lives outside `#[cfg(test)]` so that integration tests under `tests/`
//! can use it too.
//!
//! ```ignore
//! let opener = RecordingOpener::new();
//! checkout.submit("5", &cart, &opener, |_| {})?;
//! assert_eq!(opener.opened().len(), 1);
//! ```

use std::cell::RefCell;

use super::LinkOpener;

#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    /// The most recently opened URL.
    pub fn last(&self) -> Option<String> {
        self.opened.borrow().last().cloned()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}
