// src/hedging/mod.rs
pub mod engine;
