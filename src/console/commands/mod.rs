mod callable;
pub mod dashboard;

pub use callable::*;
