// src/analytics/mod.rs
pub mod call_option;
