//! Ctrl-C handling.
//! The handler only raises a flag; the rule engine checks it before touching each
//! file so a run never stops halfway through a rename.

use std::sync::atomic::{AtomicBool, Ordering};

static REQUESTED: AtomicBool = AtomicBool::new(false);

#[inline]
pub fn request() {
    REQUESTED.store(true, Ordering::Relaxed);
}

#[inline]
pub fn is_requested() -> bool {
    REQUESTED.load(Ordering::Relaxed)
}

/// Install the process-wide Ctrl-C handler. `on_signal` runs after the flag is set.
pub fn install<F>(on_signal: F) -> Result<(), ctrlc::Error>
where
    F: FnMut() + Send + 'static,
{
    let mut on_signal = on_signal;
    ctrlc::set_handler(move || {
        request();
        on_signal();
    })
}
