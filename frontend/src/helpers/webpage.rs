use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Storage, Window};

use crate::error::PageError;

pub struct WebPage {}

impl WebPage {
    #[inline]
    pub fn window() -> Result<Window, PageError> {
        web_sys::window().ok_or(PageError::NoWindow)
    }

    #[inline]
    pub fn document() -> Result<Document, PageError> {
        Self::window()?.document().ok_or(PageError::NoDocument)
    }

    #[inline]
    pub fn body() -> Result<HtmlElement, PageError> {
        Self::document()?.body().ok_or(PageError::NoBody)
    }

    /// `None` when storage is disabled or access throws.
    pub fn local_storage() -> Option<Storage> {
        match Self::window().ok()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("Local storage is not accessible: {err:?}");
                None
            }
        }
    }

    pub fn scroll_y() -> f64 {
        Self::window()
            .and_then(|window| window.scroll_y().map_err(PageError::from))
            .unwrap_or(0.0)
    }

    pub fn smooth_scroll_to(top: f64) -> Result<(), PageError> {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        Self::window()?.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}
