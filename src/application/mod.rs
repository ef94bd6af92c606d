//! Application layer - use cases over the domain

pub mod usuarios;

pub use usuarios::UsuarioService;
