pub mod animation;
pub mod ar;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod i18n;
pub mod nav;
pub mod route;
pub mod screen;
pub mod topology;
pub mod viewport;
