//! Database entities module

pub mod usuario;

pub use usuario::Entity as Usuario;
