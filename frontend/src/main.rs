use portfolio_frontend::{app, config};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    if let Err(err) = app::start(config::Config::default()) {
        log::error!("Page behaviors failed to start: {err}");
    }
}
