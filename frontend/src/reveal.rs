use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{config::RevealConfig, error::PageError, helpers::prelude::*};

pub trait RevealTarget {
    fn is_revealed(&self) -> bool;
    fn reveal(&self);
    fn unwatch(&self);
}

/// Reveals `target` the first time it intersects and stops watching it.
/// Returns whether this report revealed it; a revealed target stays revealed.
pub fn on_intersection<T: RevealTarget>(target: &T, intersecting: bool) -> bool {
    if !intersecting {
        return false;
    }

    let revealed = !target.is_revealed();
    if revealed {
        target.reveal();
    }
    target.unwatch();
    revealed
}

struct WebRevealTarget<'a> {
    element: web_sys::Element,
    observer: &'a IntersectionObserver,
    visible_class: &'static str,
}

impl RevealTarget for WebRevealTarget<'_> {
    fn is_revealed(&self) -> bool {
        self.element.class_list().contains(self.visible_class)
    }

    fn reveal(&self) {
        Element::set_class(&self.element, self.visible_class, true);
    }

    fn unwatch(&self) {
        self.observer.unobserve(&self.element);
    }
}

pub fn init_reveal(config: &RevealConfig) -> Result<(), PageError> {
    let elements = Element::query_all(config.query)?;
    if elements.is_empty() {
        log::debug!("No animated elements in page.");
        return Ok(());
    }

    let visible_class = config.visible_class;
    let cb: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> =
        Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = WebRevealTarget {
                    element: entry.target(),
                    observer: &observer,
                    visible_class,
                };
                on_intersection(&target, entry.is_intersecting());
            }
        });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(config.root_margin);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
    cb.forget();

    for element in &elements {
        observer.observe(element);
    }
    log::debug!("Watching {} animated elements.", elements.len());
    Ok(())
}
