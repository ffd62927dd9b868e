//! HTTP handlers for the school API and the fallbacks around it.

pub mod fallback;
pub mod school;
pub use fallback::*;
pub use school::*;
