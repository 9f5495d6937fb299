// src/ui/mod.rs
pub mod chart;
pub mod input;
pub mod results;
