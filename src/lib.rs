// src/lib.rs

pub mod config;
pub mod core;
pub mod error;

pub use crate::core::registry::CatalogRegistry;
pub use crate::error::EngineError;
