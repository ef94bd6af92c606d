//! # Usuarios service
//!
//! REST CRUD endpoint set for the Usuario resource.
//!
//! ## Architecture
//!
//! - **domain**: Usuario entity, DTOs, repository trait and errors
//! - **application**: `UsuarioService`, the CRUD use cases
//! - **infrastructure**: SeaORM entity, migrations and repository; in-memory store
//! - **interfaces**: axum handlers, router and Swagger documentation
//! - **server**: startup, tracing and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig};

pub use interfaces::http::create_api_router;
