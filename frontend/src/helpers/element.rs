use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, NodeList};

use super::prelude::*;
use crate::error::PageError;

pub struct Element {}

impl Element {
    #[inline]
    pub fn by_id(element_id: &str) -> Option<web_sys::Element> {
        WebPage::document().ok()?.get_element_by_id(element_id)
    }

    pub fn query(selector: &str) -> Result<Option<web_sys::Element>, PageError> {
        Ok(WebPage::document()?.query_selector(selector)?)
    }

    pub fn query_all(selector: &str) -> Result<Vec<web_sys::Element>, PageError> {
        Ok(Self::collect(WebPage::document()?.query_selector_all(selector)?))
    }

    pub fn query_all_in(
        root: &web_sys::Element,
        selector: &str,
    ) -> Result<Vec<web_sys::Element>, PageError> {
        Ok(Self::collect(root.query_selector_all(selector)?))
    }

    fn collect(list: NodeList) -> Vec<web_sys::Element> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    #[inline]
    pub fn as_html(element: &web_sys::Element) -> Option<&HtmlElement> {
        element.dyn_ref::<HtmlElement>()
    }

    /// Adds or removes `class`, logging instead of failing.
    pub fn set_class(element: &web_sys::Element, class: &str, on: bool) {
        if let Err(err) = element.class_list().toggle_with_force(class, on) {
            log::error!("Unable to toggle class `{class}`: {err:?}");
        }
    }
}
