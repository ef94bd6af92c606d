//! Usuarios module — CRUD orchestration over the Usuario store
//!
//! HTTP handlers are thin wrappers that delegate to `UsuarioService`.

pub mod service;

pub use service::UsuarioService;
