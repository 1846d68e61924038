// src/core/mod.rs
pub mod generator;
pub mod lexicon;
pub mod meanings;
pub mod types;
