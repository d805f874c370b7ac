//! skillpath — terminal client for a career-path recommendation service.

pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod model;
pub mod path;
pub mod profile;
pub mod render;
pub mod session;
