/// Maximum length of `nombre`, in characters
pub const NOMBRE_MAX_LEN: u64 = 100;
/// Maximum length of `apellidos`, in characters
pub const APELLIDOS_MAX_LEN: u64 = 150;

/// Usuario model
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Usuario {
    pub id: i32,
    pub nombre: String,
    pub apellidos: String,
}
