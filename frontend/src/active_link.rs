use crate::{
    config::ActiveLinkConfig, error::PageError, helpers::prelude::*, smooth_scroll::fragment_id,
};

/// Vertical extent of a page section in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

pub trait NavLink {
    fn href(&self) -> Option<String>;
    fn set_active(&self, active: bool);
}

/// The section under `scroll_y + lookahead`. Sections are scanned in
/// document order and the last match wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> Option<&str> {
    let position = scroll_y + lookahead;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

/// Marks the links pointing at `section_id` active and clears the rest.
pub fn mark_links<L: NavLink>(links: &[L], section_id: &str) {
    for link in links {
        let active = link.href().as_deref().and_then(fragment_id) == Some(section_id);
        link.set_active(active);
    }
}

struct WebNavLink {
    element: web_sys::Element,
    active_class: &'static str,
}

impl NavLink for WebNavLink {
    fn href(&self) -> Option<String> {
        self.element.get_attribute("href")
    }

    fn set_active(&self, active: bool) {
        Element::set_class(&self.element, self.active_class, active);
    }
}

fn measure(sections: &[web_sys::Element]) -> Vec<SectionBounds> {
    sections
        .iter()
        .filter_map(|section| {
            let html = Element::as_html(section)?;
            Some(SectionBounds {
                id: section.id(),
                top: f64::from(html.offset_top()),
                height: f64::from(html.offset_height()),
            })
        })
        .collect()
}

pub fn init_active_link(config: &ActiveLinkConfig) -> Result<(), PageError> {
    let sections = Element::query_all(config.section_query)?;
    let links = Element::query_all(config.link_query)?
        .into_iter()
        .map(|element| WebNavLink {
            element,
            active_class: config.active_class,
        })
        .collect::<Vec<_>>();
    if sections.is_empty() || links.is_empty() {
        log::debug!("No sections or navigation links, skipping link tracking.");
        return Ok(());
    }

    let lookahead = config.lookahead;
    let update = move || {
        // Layout can change after load, so sections are measured per event.
        let bounds = measure(&sections);
        if let Some(id) = active_section(&bounds, WebPage::scroll_y(), lookahead) {
            mark_links(&links, id);
        }
    };

    update();
    let window = WebPage::window()?;
    Listener::on(&window, "scroll", move |_| update())
}
