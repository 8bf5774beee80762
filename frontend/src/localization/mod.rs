use std::{cell::RefCell, rc::Rc};

use self::{
    catalog::Catalog,
    document::{attach_selectors, WebTranslationHost},
    storage::BrowserStorage,
};
use crate::{config::LocalizationConfig, error::PageError};

pub mod applicator;
pub mod catalog;
pub mod document;
pub mod language;
pub mod state;
pub mod storage;

pub use self::state::LanguageState;

pub type PageLanguage = LanguageState<WebTranslationHost, BrowserStorage>;

/// Loads the embedded catalog, applies the preferred language and wires the
/// language selectors.
pub fn init_language(config: &LocalizationConfig) -> Result<Rc<RefCell<PageLanguage>>, PageError> {
    let catalog = Catalog::embedded().unwrap_or_else(|err| {
        log::error!("Language failed to load: {err}");
        Catalog::default()
    });
    if cfg!(debug_assertions) {
        catalog.audit();
    }

    let state = Rc::new(RefCell::new(LanguageState::init(
        Rc::new(catalog),
        WebTranslationHost::new(config.clone()),
        BrowserStorage,
        config,
    )));
    log::info!("Language: {}", state.borrow().active_language());

    attach_selectors(&state, config)?;
    Ok(state)
}
