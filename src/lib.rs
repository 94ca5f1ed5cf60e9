pub mod app;
pub mod components;
pub mod content;
pub mod pages;

pub use app::App;
