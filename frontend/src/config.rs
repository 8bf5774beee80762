//! Markup contract and tuning constants for every page behavior.

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub localization: LocalizationConfig,
    pub navigation: NavigationConfig,
    pub reveal: RevealConfig,
    pub active_link: ActiveLinkConfig,
}

#[derive(Debug, Clone)]
pub struct LocalizationConfig {
    pub storage_key: &'static str,
    pub default_language: &'static str,
    /// Attribute holding a bound element's key path.
    pub key_attribute: &'static str,
    pub selector_query: &'static str,
    /// Attribute holding a selector's language code.
    pub selector_attribute: &'static str,
    pub selected_class: &'static str,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            storage_key: "portfolio-lang",
            default_language: "en",
            key_attribute: "data-i18n",
            selector_query: ".nav__lang-btn",
            selector_attribute: "data-lang",
            selected_class: "active",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationConfig {
    pub nav_query: &'static str,
    pub toggle_id: &'static str,
    pub menu_id: &'static str,
    pub link_query: &'static str,
    pub anchor_query: &'static str,
    /// Scroll offset in pixels past which the bar is styled as scrolled.
    pub scrolled_threshold: f64,
    pub scrolled_class: &'static str,
    pub open_class: &'static str,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            nav_query: ".nav",
            toggle_id: "nav-toggle",
            menu_id: "nav-menu",
            link_query: ".nav__link",
            anchor_query: "a[href^=\"#\"]",
            scrolled_threshold: 50.0,
            scrolled_class: "scrolled",
            open_class: "active",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevealConfig {
    pub query: &'static str,
    pub visible_class: &'static str,
    /// Fraction of the element that must be in view.
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            query: ".animate-fade-up",
            visible_class: "visible",
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActiveLinkConfig {
    pub section_query: &'static str,
    pub link_query: &'static str,
    pub active_class: &'static str,
    pub lookahead: f64,
}

impl Default for ActiveLinkConfig {
    fn default() -> Self {
        Self {
            section_query: "section[id]",
            link_query: ".nav__link",
            active_class: "active",
            lookahead: 100.0,
        }
    }
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
