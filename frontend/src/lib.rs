pub mod active_link;
pub mod app;
pub mod config;
pub mod error;
pub mod helpers;
pub mod localization;
pub mod navigation;
pub mod reveal;
pub mod smooth_scroll;
