use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, EventTarget};

use crate::error::PageError;

pub struct Listener {}

impl Listener {
    /// Attaches `handler` for the lifetime of the page.
    pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
    where
        F: FnMut(Event) + 'static,
    {
        let cb: Closure<dyn FnMut(Event)> = Closure::new(handler);
        target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    }
}
