use super::language::Language;

/// A page element carrying a translation key path.
pub struct BoundElement<N> {
    pub node: N,
    pub key: String,
}

/// The document operations translation needs. Implemented over `web_sys`
/// for the browser and in memory for tests.
pub trait TranslationHost {
    type Node;

    fn find_bound_elements(&self) -> Vec<BoundElement<Self::Node>>;
    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_document_language(&self, code: &str);
    /// Marks the selectors for `code` as selected and clears all others.
    fn mark_selected_language(&self, code: &str);
}

/// Writes the translation of every bound element whose key resolves to
/// display text in `language`. Other elements keep whatever text they have.
/// Returns how many elements were written.
pub fn apply_translations<H: TranslationHost>(host: &H, language: Option<&Language>) -> usize {
    let Some(language) = language else {
        return 0;
    };

    let mut applied = 0;
    for element in host.find_bound_elements() {
        match language.get(&element.key) {
            Some(text) => {
                host.set_text(&element.node, text);
                applied += 1;
            }
            None => log::debug!("No translation for `{}`, keeping markup text.", element.key),
        }
    }
    applied
}
