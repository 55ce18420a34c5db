pub mod animated;
pub mod cli;
pub mod config;
pub mod error;
pub mod ladder;
pub mod pipeline;
pub mod staging;
pub mod still;
