//! HTML page generators

pub mod plan;
