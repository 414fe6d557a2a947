//! Domain entities and the value objects built from them.

pub mod config;
pub mod remote;
pub mod render_context;
