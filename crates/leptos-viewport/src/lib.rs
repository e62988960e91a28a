//! Leptos Viewport Utilities
//!
//! Window width reading and scoped `resize` subscriptions for Leptos.
//! A subscription removes its listener when dropped, so tying it to the
//! current owner releases it on unmount.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Whether `width` falls in the narrow layout (inclusive breakpoint)
pub fn is_narrow(width: f64, breakpoint: f64) -> bool {
    width <= breakpoint
}

/// Current `window.innerWidth`, if a window is available
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Active `resize` listener on the window
///
/// Dropping the subscription removes the listener.
pub struct ResizeSubscription {
    window: web_sys::Window,
    on_resize: Closure<dyn FnMut(web_sys::Event)>,
}

impl ResizeSubscription {
    fn release(&self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.release();
        log::debug!("[VIEWPORT] resize listener removed");
    }
}

/// Bind a window `resize` listener that receives the new viewport width
///
/// Returns `None` when there is no window or the listener could not be added.
pub fn bind_window_resize<F>(mut on_width: F) -> Option<ResizeSubscription>
where
    F: FnMut(f64) + 'static,
{
    let window = web_sys::window()?;
    let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Some(width) = viewport_width() {
            on_width(width);
        }
    });

    if let Err(e) = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
        log::warn!("[VIEWPORT] failed to bind resize listener: {:?}", e);
        return None;
    }
    log::debug!("[VIEWPORT] resize listener bound");

    Some(ResizeSubscription { window, on_resize })
}

/// Bind a `resize` listener for the lifetime of the current reactive owner
///
/// The callback also runs once immediately with the current width, so the
/// caller sees the same value on mount as after any later resize.
pub fn bind_window_resize_scoped<F>(mut on_width: F)
where
    F: FnMut(f64) + 'static,
{
    if let Some(width) = viewport_width() {
        on_width(width);
    }

    let subscription = StoredValue::new_local(bind_window_resize(on_width));
    on_cleanup(move || {
        subscription.try_update_value(|slot| slot.take());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert!(is_narrow(768.0, 768.0));
        assert!(is_narrow(500.0, 768.0));
        assert!(!is_narrow(768.5, 768.0));
        assert!(!is_narrow(1024.0, 768.0));
    }

    #[test]
    fn test_zero_width_is_narrow() {
        assert!(is_narrow(0.0, 768.0));
    }
}
