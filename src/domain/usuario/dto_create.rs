#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUsuarioDto {
    pub nombre: String,
    pub apellidos: String,
}
