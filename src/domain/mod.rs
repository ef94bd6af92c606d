//! Domain layer
//!
//! The Usuario aggregate and the error types shared by every layer.

pub mod error;
pub mod usuario;

pub use error::{DomainError, DomainResult, InfraError};
pub use usuario::{CreateUsuarioDto, UpdateUsuarioDto, Usuario, UsuarioRepositoryInterface};
