use crate::{config::NavigationConfig, error::PageError, helpers::prelude::*};

/// Page geometry needed to plan an in-page scroll.
pub trait ScrollGeometry {
    /// Top edge of the element with `id`, relative to the viewport.
    fn target_top(&self, id: &str) -> Option<f64>;
    fn scroll_y(&self) -> f64;
    fn nav_height(&self) -> f64;
}

/// Fragment identifier of an in-page link, `None` for a bare `#`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset that puts the target of `href` just below the
/// navigation bar, or `None` when the link has no target on this page.
pub fn scroll_destination<G: ScrollGeometry>(geometry: &G, href: &str) -> Option<f64> {
    let top = geometry.target_top(fragment_id(href)?)?;
    Some(top + geometry.scroll_y() - geometry.nav_height())
}

struct WebGeometry {
    nav: Option<web_sys::Element>,
}

impl ScrollGeometry for WebGeometry {
    fn target_top(&self, id: &str) -> Option<f64> {
        Element::by_id(id).map(|target| target.get_bounding_client_rect().top())
    }

    fn scroll_y(&self) -> f64 {
        WebPage::scroll_y()
    }

    fn nav_height(&self) -> f64 {
        self.nav
            .as_ref()
            .and_then(Element::as_html)
            .map(|nav| f64::from(nav.offset_height()))
            .unwrap_or(0.0)
    }
}

pub fn init_smooth_scroll(config: &NavigationConfig) -> Result<(), PageError> {
    let nav = Element::query(config.nav_query)?;

    for anchor in Element::query_all(config.anchor_query)? {
        let geometry = WebGeometry { nav: nav.clone() };
        let link = anchor.clone();
        Listener::on(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(top) = scroll_destination(&geometry, &href) else {
                log::debug!("No target for `{href}`.");
                return;
            };

            event.prevent_default();
            if let Err(err) = WebPage::smooth_scroll_to(top) {
                log::error!("Unable to scroll to `{href}`: {err}");
            }
        })?;
    }
    Ok(())
}
