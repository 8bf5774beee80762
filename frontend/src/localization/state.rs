use std::rc::Rc;

use super::{
    applicator::{apply_translations, TranslationHost},
    catalog::Catalog,
    storage::PreferenceStore,
};
use crate::config::LocalizationConfig;

/// Owns the active language for the page session.
pub struct LanguageState<H, S> {
    catalog: Rc<Catalog>,
    active: String,
    host: H,
    store: S,
    storage_key: &'static str,
}

impl<H, S> LanguageState<H, S>
where
    H: TranslationHost,
    S: PreferenceStore,
{
    /// Picks the persisted language when the catalog knows it, the default
    /// otherwise, and applies it to the whole document.
    pub fn init(catalog: Rc<Catalog>, host: H, store: S, config: &LocalizationConfig) -> Self {
        let active = match store.load(config.storage_key) {
            Some(code) if catalog.contains(&code) => code,
            Some(code) => {
                log::debug!("Ignoring unsupported stored language `{code}`.");
                config.default_language.to_owned()
            }
            None => config.default_language.to_owned(),
        };

        let state = Self {
            catalog,
            active,
            host,
            store,
            storage_key: config.storage_key,
        };
        state.apply();
        state
    }

    pub fn active_language(&self) -> &str {
        &self.active
    }

    /// Switches to `code` and rewrites the document. Returns `false` without
    /// touching anything when `code` is already active.
    pub fn set_active_language(&mut self, code: &str) -> bool {
        if code == self.active {
            return false;
        }

        log::debug!("Switching language: {} -> {code}", self.active);
        self.active = code.to_owned();
        self.apply();
        true
    }

    #[cfg(test)]
    pub(crate) fn host(&self) -> &H {
        &self.host
    }

    fn apply(&self) {
        let code = self.active.as_str();
        let applied = apply_translations(&self.host, self.catalog.language(code));
        log::debug!("Applied {applied} translations for `{code}`.");

        self.host.set_document_language(code);
        self.host.mark_selected_language(code);

        if let Err(err) = self.store.save(self.storage_key, code) {
            log::warn!("Language preference was not saved: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::{applicator::fake::FakeHost, storage::fake::MemoryStorage};
    use pretty_assertions::assert_eq;

    const KEY: &str = "portfolio-lang";

    fn catalog() -> Rc<Catalog> {
        let mut catalog = Catalog::default();
        catalog
            .load_str("en", r#"{ "hero": { "title": "Hello" }, "nav": { "work": "Work" } }"#)
            .unwrap();
        catalog
            .load_str("fi", r#"{ "hero": { "title": "Hei" } }"#)
            .unwrap();
        Rc::new(catalog)
    }

    fn state(
        host: FakeHost,
        store: MemoryStorage,
    ) -> LanguageState<FakeHost, MemoryStorage> {
        LanguageState::init(catalog(), host, store, &LocalizationConfig::default())
    }

    #[test]
    fn init_uses_default_without_preference() {
        let state = state(
            FakeHost::with_elements(&[("hero.title", "X")]),
            MemoryStorage::default(),
        );
        assert_eq!(state.active_language(), "en");
        assert_eq!(state.host().text(0), "Hello");
        assert_eq!(state.host().document_language.borrow().as_deref(), Some("en"));
        assert_eq!(state.host().selected_language.borrow().as_deref(), Some("en"));
        assert_eq!(state.store.get(KEY).as_deref(), Some("en"));
    }

    #[test]
    fn init_uses_stored_preference() {
        let state = state(
            FakeHost::with_elements(&[("hero.title", "X")]),
            MemoryStorage::with(KEY, "fi"),
        );
        assert_eq!(state.active_language(), "fi");
        assert_eq!(state.host().text(0), "Hei");
    }

    #[test]
    fn init_ignores_unsupported_preference() {
        let state = state(FakeHost::default(), MemoryStorage::with(KEY, "de"));
        assert_eq!(state.active_language(), "en");
        assert_eq!(state.store.get(KEY).as_deref(), Some("en"));
    }

    #[test]
    fn denied_storage_falls_back_to_default() {
        let mut state = state(
            FakeHost::with_elements(&[("hero.title", "X")]),
            MemoryStorage::denied(),
        );
        assert_eq!(state.active_language(), "en");
        assert_eq!(state.host().text(0), "Hello");

        assert!(state.set_active_language("fi"));
        assert_eq!(state.host().text(0), "Hei");
    }

    #[test]
    fn switching_rewrites_text_and_declared_language() {
        let mut state = state(
            FakeHost::with_elements(&[("hero.title", "X")]),
            MemoryStorage::default(),
        );
        assert_eq!(state.host().text(0), "Hello");

        assert!(state.set_active_language("fi"));
        assert_eq!(state.active_language(), "fi");
        assert_eq!(state.host().text(0), "Hei");
        assert_eq!(state.host().document_language.borrow().as_deref(), Some("fi"));
        assert_eq!(state.host().selected_language.borrow().as_deref(), Some("fi"));
        assert_eq!(state.store.get(KEY).as_deref(), Some("fi"));
    }

    #[test]
    fn switching_to_unknown_language_keeps_text() {
        let mut state = state(
            FakeHost::with_elements(&[("hero.title", "X")]),
            MemoryStorage::default(),
        );
        state.set_active_language("fi");

        assert!(state.set_active_language("de"));
        assert_eq!(state.host().text(0), "Hei");
        assert_eq!(state.host().document_language.borrow().as_deref(), Some("de"));
    }

    #[test]
    fn key_missing_in_target_language_keeps_previous_text() {
        let mut state = state(
            FakeHost::with_elements(&[("nav.work", "X")]),
            MemoryStorage::default(),
        );
        assert_eq!(state.host().text(0), "Work");

        state.set_active_language("fi");
        assert_eq!(state.host().text(0), "Work");
    }

    #[test]
    fn switching_to_active_language_is_a_no_op() {
        let mut state = state(
            FakeHost::with_elements(&[("hero.title", "X")]),
            MemoryStorage::default(),
        );
        let mutations = state.host().mutations.get();
        let writes = state.store.writes.get();

        assert!(!state.set_active_language("en"));
        assert_eq!(state.host().mutations.get(), mutations);
        assert_eq!(state.store.writes.get(), writes);
    }
}
