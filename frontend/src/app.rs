use crate::{
    active_link, config::Config, error::PageError, helpers::prelude::*, localization, navigation,
    reveal, smooth_scroll,
};

/// Runs every page behavior once the document has been parsed.
pub fn start(config: Config) -> Result<(), PageError> {
    let document = WebPage::document()?;
    if document.ready_state() != "loading" {
        run(&config);
        return Ok(());
    }

    Listener::on(&document, "DOMContentLoaded", move |_| run(&config))
}

fn run(config: &Config) {
    if let Err(err) = localization::init_language(&config.localization) {
        log::error!("Language switcher failed to start: {err}");
    }

    report("Navigation", navigation::init_navigation(&config.navigation));
    report("Smooth scroll", smooth_scroll::init_smooth_scroll(&config.navigation));
    report("Reveal animations", reveal::init_reveal(&config.reveal));
    report("Active link tracking", active_link::init_active_link(&config.active_link));
}

fn report(name: &str, result: Result<(), PageError>) {
    if let Err(err) = result {
        log::error!("{name} failed to start: {err}");
    }
}
