use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;

/// Delays a callback until calls stop arriving for `delay_ms`. A newer call
/// drops the pending [`Timeout`], which cancels it and frees its closure.
#[derive(Clone)]
pub struct Debounce {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    #[must_use]
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let superseded = self
            .pending
            .replace(Some(Timeout::new(self.delay_ms, f)));
        drop(superseded);
    }

    pub fn cancel(&self) {
        drop(self.pending.take());
    }
}
