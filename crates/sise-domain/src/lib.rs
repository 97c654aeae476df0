//! Domain layer: listing model, aggregation engine, repository traits

pub mod model;
pub mod repository;
pub mod service;
