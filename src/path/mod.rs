//! Learning-path core: resolution, lifecycle, and step progress.

pub mod lifecycle;
pub mod progress;
pub mod resolver;

pub use resolver::Resolution;
