//! Debouncing over an abstract timer.
//!
//! [`Debouncer`] owns its pending timer handle. Each [`call`](Debouncer::call)
//! drops the previous handle, which cancels it, and schedules a new one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::DebounceEdge;

/// One-shot timers whose handles cancel the timer when dropped.
///
/// [`GlooScheduler`](crate::utils::GlooScheduler) is the browser implementation.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, wait_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Delays `func` until calls stop arriving for `wait_ms`.
///
/// With [`DebounceEdge::Trailing`] only the last input of a burst is
/// delivered, after the quiet period. With [`DebounceEdge::Leading`] the
/// first input is delivered immediately and the rest of the burst is
/// dropped.
pub struct Debouncer<T, S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    edge: DebounceEdge,
    func: Rc<dyn Fn(T)>,
    pending: RefCell<Option<S::Handle>>,
    armed: Rc<Cell<bool>>,
}

impl<T: Clone + 'static, S: Scheduler> Debouncer<T, S> {
    pub fn new(scheduler: S, wait_ms: u32, edge: DebounceEdge, func: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            wait_ms,
            edge,
            func: Rc::new(func),
            pending: RefCell::new(None),
            armed: Rc::new(Cell::new(false)),
        }
    }

    pub fn call(&self, input: T) {
        let call_now = self.edge == DebounceEdge::Leading && !self.armed.get();

        // Dropping the handle cancels the previous timer.
        self.pending.borrow_mut().take();
        self.armed.set(true);

        let armed = Rc::clone(&self.armed);
        let func = Rc::clone(&self.func);
        let trailing = (self.edge == DebounceEdge::Trailing).then(|| input.clone());
        let handle = self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                armed.set(false);
                if let Some(input) = trailing {
                    func(input);
                }
            }),
        );
        *self.pending.borrow_mut() = Some(handle);

        if call_now {
            (self.func)(input);
        }
    }

    /// Whether a timer is waiting to fire.
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }

    /// Drop the pending timer without delivering anything.
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
        self.armed.set(false);
    }
}
