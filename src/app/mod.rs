pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod environment;

pub use context::AppContext;
