//! Infrastructure layer - external concerns

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig};
pub use database::repositories::SeaOrmUsuarioRepository;
pub use storage::InMemoryUsuarioRepository;
