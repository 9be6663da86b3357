mod app;
mod constants;
mod error;
mod input;
mod logging;
mod render;

pub use app::run_app;
