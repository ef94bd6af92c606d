use super::CreateUsuarioDto;

/// Field-wise update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUsuarioDto {
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
}

impl UpdateUsuarioDto {
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none() && self.apellidos.is_none()
    }
}

/// A full replacement is an update that sets every field.
impl From<CreateUsuarioDto> for UpdateUsuarioDto {
    fn from(dto: CreateUsuarioDto) -> Self {
        Self {
            nombre: Some(dto.nombre),
            apellidos: Some(dto.apellidos),
        }
    }
}
