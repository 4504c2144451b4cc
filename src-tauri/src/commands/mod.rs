pub mod config;
pub mod mood;
