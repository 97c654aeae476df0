//! Application service layer - config, listing service, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
