pub mod ar_demo;
pub mod config;
pub mod locations;
pub mod route;
