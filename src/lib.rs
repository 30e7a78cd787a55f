pub mod app;
pub mod core;
pub mod features;
pub mod logging;
pub mod models;
pub mod pages;

pub use app::App;
