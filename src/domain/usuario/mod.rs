//! Usuario aggregate
//!
//! Contains the Usuario entity, DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_update;

pub use model::{Usuario, APELLIDOS_MAX_LEN, NOMBRE_MAX_LEN};

pub use dto_create::CreateUsuarioDto;
pub use dto_update::UpdateUsuarioDto;

pub use repository::UsuarioRepositoryInterface;
