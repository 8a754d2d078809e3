//! fibdemo library — application logic for the `fib` demonstration.

pub mod app;
pub mod config;
pub mod errors;
