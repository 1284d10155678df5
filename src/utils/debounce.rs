use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::window;

/// Window-resize listener that waits for `delay_ms` of quiet before invoking
/// `callback`, so a drag-resize triggers one chart re-render instead of one
/// per event.
///
/// Returns `None` outside a browser context. Drop the listener to detach.
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + Clone + 'static,
{
    let window = window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    Some(EventListener::new(&window, "resize", move |_| {
        let timeout = Timeout::new(delay_ms, callback.clone());

        // Arming a new timeout cancels the previous one
        if let Some(previous) = pending.borrow_mut().replace(timeout) {
            previous.cancel();
        }
    }))
}
