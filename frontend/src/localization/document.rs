use std::{cell::RefCell, rc::Rc};

use super::{
    applicator::{BoundElement, TranslationHost},
    storage::PreferenceStore,
    LanguageState,
};
use crate::{config::LocalizationConfig, error::PageError, helpers::prelude::*};

/// Translation target backed by the live document.
pub struct WebTranslationHost {
    config: LocalizationConfig,
}

impl WebTranslationHost {
    pub fn new(config: LocalizationConfig) -> Self {
        Self { config }
    }
}

impl TranslationHost for WebTranslationHost {
    type Node = web_sys::Element;

    fn find_bound_elements(&self) -> Vec<BoundElement<web_sys::Element>> {
        let attribute = self.config.key_attribute;
        let elements = match Element::query_all(&format!("[{attribute}]")) {
            Ok(elements) => elements,
            Err(err) => {
                log::error!("Unable to collect translated elements: {err}");
                return Vec::new();
            }
        };

        elements
            .into_iter()
            .filter_map(|node| {
                let key = node.get_attribute(attribute)?;
                Some(BoundElement { node, key })
            })
            .collect()
    }

    fn set_text(&self, node: &web_sys::Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_document_language(&self, code: &str) {
        let root = WebPage::document()
            .ok()
            .and_then(|document| document.document_element());
        match root {
            Some(root) => {
                if let Err(err) = root.set_attribute("lang", code) {
                    log::error!("Unable to set document language: {err:?}");
                }
            }
            None => log::warn!("Document has no root element."),
        }
    }

    fn mark_selected_language(&self, code: &str) {
        let selectors = match Element::query_all(self.config.selector_query) {
            Ok(selectors) => selectors,
            Err(err) => {
                log::error!("Unable to collect language selectors: {err}");
                return;
            }
        };

        for selector in selectors {
            let selected =
                selector.get_attribute(self.config.selector_attribute).as_deref() == Some(code);
            Element::set_class(&selector, self.config.selected_class, selected);
        }
    }
}

/// Switches language when a selector control is clicked.
pub fn attach_selectors<S>(
    state: &Rc<RefCell<LanguageState<WebTranslationHost, S>>>,
    config: &LocalizationConfig,
) -> Result<(), PageError>
where
    S: PreferenceStore + 'static,
{
    let selectors = Element::query_all(config.selector_query)?;
    if selectors.is_empty() {
        log::debug!("No language selectors in page.");
    }

    for selector in selectors {
        let state = state.clone();
        let attribute = config.selector_attribute;
        let target = selector.clone();
        Listener::on(&selector, "click", move |_| {
            if let Some(code) = target.get_attribute(attribute) {
                state.borrow_mut().set_active_language(&code);
            }
        })?;
    }
    Ok(())
}
