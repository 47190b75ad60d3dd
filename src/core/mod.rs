// src/core/mod.rs
pub mod catalog;
pub mod challenge;
pub mod generator;
pub mod item;
pub mod player;
pub mod registry;
pub mod types;
