use std::collections::BTreeMap;

use super::language::Language;
use crate::error::PageError;

/// Language files compiled into the binary, keyed by language code.
const EMBEDDED_LANGUAGES: &[(&str, &str)] = &[
    ("en", include_str!("../../static/localization/languages/en.json")),
    ("fi", include_str!("../../static/localization/languages/fi.json")),
];

#[derive(Debug, Default)]
pub struct Catalog {
    languages: BTreeMap<String, Language>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, PageError> {
        let mut catalog = Self::default();
        for (code, source) in EMBEDDED_LANGUAGES {
            catalog.load_str(code, source)?;
        }
        Ok(catalog)
    }

    pub fn load_str(&mut self, code: &str, source: &str) -> Result<(), PageError> {
        let language =
            serde_json::from_str::<Language>(source).map_err(|source| PageError::Catalog {
                code: code.to_owned(),
                source,
            })?;
        self.insert(code, language);
        Ok(())
    }

    pub fn insert(&mut self, code: &str, language: Language) {
        self.languages.insert(code.to_owned(), language);
    }

    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Display text for `key` in `code`. Unknown languages behave like
    /// missing keys.
    pub fn translate(&self, code: &str, key: &str) -> Option<&str> {
        self.language(code)?.get(key)
    }

    pub fn key_paths(&self, code: &str) -> Vec<String> {
        self.language(code)
            .map(Language::key_paths)
            .unwrap_or_default()
    }

    /// Leaf paths defined in `reference` that have no display text in
    /// `code`, either absent or empty.
    pub fn missing_keys(&self, reference: &str, code: &str) -> Vec<String> {
        let Some(language) = self.language(code) else {
            return self.key_paths(reference);
        };

        self.key_paths(reference)
            .into_iter()
            .filter(|path| language.get(path).is_none())
            .collect()
    }

    /// Logs every key that some language defines and another lacks.
    pub fn audit(&self) {
        for reference in self.codes() {
            for code in self.codes().filter(|code| *code != reference) {
                for key in self.missing_keys(reference, code) {
                    log::warn!(
                        "Translation `{key}` exists in `{reference}` but has no text in `{code}`."
                    );
                }
            }
        }
    }
}
