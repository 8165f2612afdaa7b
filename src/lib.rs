pub type Result<T> = std::result::Result<T, String>;

mod app;
mod cli;
mod input;
mod output;
mod render;
mod sequence;
mod time;
mod types;
mod ui;

pub use app::run;
