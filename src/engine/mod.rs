pub mod accumulator;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod summary;

#[cfg(test)]
mod unit_tests;

pub use engine::{Engine, Summary};
