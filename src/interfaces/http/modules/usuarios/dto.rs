//! Usuario DTOs

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domain::usuario::{APELLIDOS_MAX_LEN, NOMBRE_MAX_LEN};
use crate::domain::{CreateUsuarioDto, UpdateUsuarioDto, Usuario};

/// Usuario API representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UsuarioDto {
    pub id: i32,
    pub nombre: String,
    pub apellidos: String,
}

impl From<Usuario> for UsuarioDto {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            apellidos: u.apellidos,
        }
    }
}

/// A text field as it arrived in the request body.
///
/// Keeps "absent" apart from an explicit `null` so each gets its own
/// validation message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum FieldInput {
    #[default]
    Missing,
    Null,
    Value(String),
}

impl FieldInput {
    /// Trimmed value, `None` when absent or null.
    pub fn into_trimmed(self) -> Option<String> {
        match self {
            Self::Value(s) => Some(s.trim().to_string()),
            Self::Missing | Self::Null => None,
        }
    }
}

impl From<&str> for FieldInput {
    fn from(s: &str) -> Self {
        Self::Value(s.to_string())
    }
}

impl<'de> Deserialize<'de> for FieldInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(s) => Self::Value(s),
            None => Self::Null,
        })
    }
}

/// Create / replace request. Any `id` in the body is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UsuarioRequest {
    #[serde(default)]
    #[validate(custom(function = "required_nombre"))]
    #[schema(value_type = String, max_length = 100)]
    pub nombre: FieldInput,
    #[serde(default)]
    #[validate(custom(function = "required_apellidos"))]
    #[schema(value_type = String, max_length = 150)]
    pub apellidos: FieldInput,
}

/// Only meaningful once the request has passed validation.
impl From<UsuarioRequest> for CreateUsuarioDto {
    fn from(r: UsuarioRequest) -> Self {
        Self {
            nombre: r.nombre.into_trimmed().unwrap_or_default(),
            apellidos: r.apellidos.into_trimmed().unwrap_or_default(),
        }
    }
}

/// Partial update request; absent fields are left untouched
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct PatchUsuarioRequest {
    #[serde(default)]
    #[validate(custom(function = "optional_nombre"))]
    #[schema(value_type = Option<String>, max_length = 100)]
    pub nombre: FieldInput,
    #[serde(default)]
    #[validate(custom(function = "optional_apellidos"))]
    #[schema(value_type = Option<String>, max_length = 150)]
    pub apellidos: FieldInput,
}

impl From<PatchUsuarioRequest> for UpdateUsuarioDto {
    fn from(r: PatchUsuarioRequest) -> Self {
        Self {
            nombre: r.nombre.into_trimmed(),
            apellidos: r.apellidos.into_trimmed(),
        }
    }
}

// ── Field rules ─────────────────────────────────────────────────

fn required_nombre(value: &FieldInput) -> Result<(), ValidationError> {
    text_field(value, NOMBRE_MAX_LEN, true)
}

fn required_apellidos(value: &FieldInput) -> Result<(), ValidationError> {
    text_field(value, APELLIDOS_MAX_LEN, true)
}

fn optional_nombre(value: &FieldInput) -> Result<(), ValidationError> {
    text_field(value, NOMBRE_MAX_LEN, false)
}

fn optional_apellidos(value: &FieldInput) -> Result<(), ValidationError> {
    text_field(value, APELLIDOS_MAX_LEN, false)
}

/// Present, not null, non-blank once trimmed, at most `max_len` characters.
fn text_field(value: &FieldInput, max_len: u64, required: bool) -> Result<(), ValidationError> {
    let raw = match value {
        FieldInput::Missing if required => {
            return Err(ValidationError::new("required")
                .with_message(Cow::Borrowed("This field is required.")));
        }
        FieldInput::Missing => return Ok(()),
        FieldInput::Null => {
            return Err(ValidationError::new("null")
                .with_message(Cow::Borrowed("This field may not be null.")));
        }
        FieldInput::Value(raw) => raw,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("This field may not be blank.")));
    }
    if trimmed.chars().count() as u64 > max_len {
        return Err(ValidationError::new("max_length").with_message(Cow::Owned(format!(
            "Ensure this field has no more than {} characters.",
            max_len
        ))));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(nombre: &str, apellidos: &str) -> UsuarioRequest {
        UsuarioRequest {
            nombre: nombre.into(),
            apellidos: apellidos.into(),
        }
    }

    fn message(errors: &validator::ValidationErrors, field: &str) -> String {
        errors.field_errors()[field][0]
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn blank_fields_are_rejected() {
        let errors = request("   ", "García").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("nombre"));
        assert!(!fields.contains_key("apellidos"));
    }

    #[test]
    fn length_limit_counts_characters_after_trim() {
        let at_limit = "ñ".repeat(NOMBRE_MAX_LEN as usize);
        assert!(request(&format!("  {}  ", at_limit), "García").validate().is_ok());

        let over = "a".repeat(APELLIDOS_MAX_LEN as usize + 1);
        let errors = request("Ana", &over).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("apellidos"));
    }

    #[test]
    fn conversion_trims_whitespace() {
        let dto = CreateUsuarioDto::from(request("  Ana ", "García  "));
        assert_eq!(dto.nombre, "Ana");
        assert_eq!(dto.apellidos, "García");
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let req: UsuarioRequest =
            serde_json::from_str(r#"{"id": "", "nombre": "Ana", "apellidos": "García"}"#).unwrap();
        assert_eq!(req.nombre, FieldInput::from("Ana"));
    }

    #[test]
    fn missing_and_null_fields_are_told_apart() {
        let req: UsuarioRequest = serde_json::from_str(r#"{"nombre": null}"#).unwrap();
        assert_eq!(req.nombre, FieldInput::Null);
        assert_eq!(req.apellidos, FieldInput::Missing);

        let errors = req.validate().unwrap_err();
        assert_eq!(message(&errors, "nombre"), "This field may not be null.");
        assert_eq!(message(&errors, "apellidos"), "This field is required.");
    }

    #[test]
    fn patch_only_validates_present_fields() {
        let patch = PatchUsuarioRequest {
            nombre: FieldInput::Missing,
            apellidos: "Ruiz".into(),
        };
        assert!(patch.validate().is_ok());

        let patch = PatchUsuarioRequest {
            nombre: "".into(),
            apellidos: FieldInput::Missing,
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn patch_rejects_explicit_null() {
        let patch: PatchUsuarioRequest = serde_json::from_str(r#"{"nombre": null}"#).unwrap();
        let errors = patch.validate().unwrap_err();
        assert_eq!(message(&errors, "nombre"), "This field may not be null.");
        assert!(!errors.field_errors().contains_key("apellidos"));
    }
}
