use std::{cell::RefCell, rc::Rc};

use web_sys::HtmlElement;

use crate::{config::NavigationConfig, error::PageError, helpers::prelude::*};

/// The two independent flags behind the navigation bar's styling.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NavigationState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavigationState {
    pub fn on_scroll(&mut self, offset: f64, threshold: f64) -> bool {
        self.scrolled = offset > threshold;
        self.scrolled
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

struct MenuView {
    toggle: web_sys::Element,
    menu: web_sys::Element,
    body: Option<HtmlElement>,
    open_class: &'static str,
}

impl MenuView {
    fn render(&self, open: bool) {
        Element::set_class(&self.toggle, self.open_class, open);
        Element::set_class(&self.menu, self.open_class, open);

        let expanded = if open { "true" } else { "false" };
        if let Err(err) = self.toggle.set_attribute("aria-expanded", expanded) {
            log::error!("Unable to set aria-expanded: {err:?}");
        }

        // Keep the page behind an open menu from scrolling.
        if let Some(body) = &self.body {
            let overflow = if open { "hidden" } else { "" };
            if let Err(err) = body.style().set_property("overflow", overflow) {
                log::error!("Unable to set body overflow: {err:?}");
            }
        }
    }
}

pub fn init_navigation(config: &NavigationConfig) -> Result<(), PageError> {
    let state = Rc::new(RefCell::new(NavigationState::default()));
    attach_scroll_style(&state, config)?;
    attach_menu(&state, config)
}

fn attach_scroll_style(
    state: &Rc<RefCell<NavigationState>>,
    config: &NavigationConfig,
) -> Result<(), PageError> {
    let Some(nav) = Element::query(config.nav_query)? else {
        log::debug!("No navigation bar, skipping scroll styling.");
        return Ok(());
    };

    let state = state.clone();
    let threshold = config.scrolled_threshold;
    let class = config.scrolled_class;
    let window = WebPage::window()?;
    Listener::on(&window, "scroll", move |_| {
        let scrolled = state.borrow_mut().on_scroll(WebPage::scroll_y(), threshold);
        Element::set_class(&nav, class, scrolled);
    })
}

fn attach_menu(
    state: &Rc<RefCell<NavigationState>>,
    config: &NavigationConfig,
) -> Result<(), PageError> {
    let (Some(toggle), Some(menu)) = (
        Element::by_id(config.toggle_id),
        Element::by_id(config.menu_id),
    ) else {
        log::debug!("No mobile menu, skipping menu wiring.");
        return Ok(());
    };

    let links = Element::query_all_in(&menu, config.link_query)?;
    let view = Rc::new(MenuView {
        toggle: toggle.clone(),
        menu,
        body: WebPage::body().ok(),
        open_class: config.open_class,
    });

    {
        let state = state.clone();
        let view = view.clone();
        Listener::on(&toggle, "click", move |_| {
            let open = state.borrow_mut().toggle_menu();
            view.render(open);
        })?;
    }

    for link in links {
        let state = state.clone();
        let view = view.clone();
        Listener::on(&link, "click", move |_| {
            state.borrow_mut().close_menu();
            view.render(false);
        })?;
    }
    Ok(())
}
