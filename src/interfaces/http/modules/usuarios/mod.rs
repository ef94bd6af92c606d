//! Usuarios module — the CRUD endpoint set

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
