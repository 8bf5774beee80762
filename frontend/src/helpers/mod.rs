pub mod element;
pub mod event;
pub mod webpage;

pub mod prelude {
    pub use super::{element::Element, event::Listener, webpage::WebPage};
}
