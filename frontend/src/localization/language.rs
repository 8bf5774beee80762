use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single value in a language tree: either display text or a nested tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Branch(Language),
}

/// Result of walking a key path. A path may stop on a subtree, which has
/// no display text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    Text(&'a str),
    Tree(&'a Language),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Language {
    translations: BTreeMap<String, Entry>,
}

impl Language {
    /// Descends `path` one dot-separated segment at a time. An empty path
    /// resolves to the tree itself.
    pub fn resolve(&self, path: &str) -> Option<Resolved<'_>> {
        if path.is_empty() {
            return Some(Resolved::Tree(self));
        }

        path.split('.')
            .try_fold(Resolved::Tree(self), |current, segment| match current {
                Resolved::Tree(tree) => match tree.translations.get(segment)? {
                    Entry::Text(text) => Some(Resolved::Text(text.as_str())),
                    Entry::Branch(branch) => Some(Resolved::Tree(branch)),
                },
                Resolved::Text(_) => None,
            })
    }

    /// Display text for `key`, if it names a non-empty string leaf.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.resolve(key)? {
            Resolved::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Every leaf path in the tree, in sorted order.
    pub fn key_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths("", &mut paths);
        paths
    }

    fn collect_paths(&self, prefix: &str, paths: &mut Vec<String>) {
        for (key, entry) in &self.translations {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match entry {
                Entry::Text(_) => paths.push(path),
                Entry::Branch(branch) => branch.collect_paths(&path, paths),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Language {
        serde_json::from_str(
            r#"{
                "hero": { "title": "Hello", "empty": "" },
                "projects": { "p1": { "title": "Healthcare" } },
                "footer": "All rights reserved."
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn resolves_nested_leaf() {
        let lang = sample();
        assert_eq!(lang.resolve("hero.title"), Some(Resolved::Text("Hello")));
        assert_eq!(lang.get("projects.p1.title"), Some("Healthcare"));
        assert_eq!(lang.get("footer"), Some("All rights reserved."));
    }

    #[test]
    fn missing_segment_is_no_value() {
        let lang = sample();
        assert_eq!(lang.resolve("hero.subtitle"), None);
        assert_eq!(lang.resolve("missing.title"), None);
        assert_eq!(lang.resolve("hero..title"), None);
    }

    #[test]
    fn descending_past_a_leaf_is_no_value() {
        let lang = sample();
        assert_eq!(lang.resolve("footer.rights"), None);
        assert_eq!(lang.resolve("hero.title.extra"), None);
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(sample().get("Hero.Title"), None);
    }

    #[test]
    fn empty_path_resolves_to_root_tree() {
        let lang = sample();
        assert_eq!(lang.resolve(""), Some(Resolved::Tree(&lang)));
        assert_eq!(lang.get(""), None);
    }

    #[test]
    fn subtree_and_empty_string_have_no_display_text() {
        let lang = sample();
        assert!(matches!(lang.resolve("projects.p1"), Some(Resolved::Tree(_))));
        assert_eq!(lang.get("projects.p1"), None);
        assert_eq!(lang.resolve("hero.empty"), Some(Resolved::Text("")));
        assert_eq!(lang.get("hero.empty"), None);
    }

    #[test]
    fn key_paths_lists_leaves() {
        assert_eq!(
            sample().key_paths(),
            vec!["footer", "hero.empty", "hero.title", "projects.p1.title"]
        );
    }
}
