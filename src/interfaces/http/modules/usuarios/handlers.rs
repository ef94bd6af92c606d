//! Usuario CRUD handlers
//!
//! Thin wrappers: parse the request, delegate to `UsuarioService`, shape the
//! response.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{PatchUsuarioRequest, UsuarioDto, UsuarioRequest};
use crate::application::UsuarioService;
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedJson, ValidatedJsonRejection};

#[derive(Clone)]
pub struct UsuarioHandlerState {
    pub usuario_service: Arc<UsuarioService>,
}

/// Ids that are not integers can never match a record.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::not_found())
}

/// The record is looked up before the body is examined, so a missing
/// record answers 404 whatever the payload.
async fn existing_id(state: &UsuarioHandlerState, raw: &str) -> Result<i32, ApiError> {
    let id = parse_id(raw)?;
    state.usuario_service.get(id).await?;
    Ok(id)
}

#[utoipa::path(
    get,
    path = "/api/usuario",
    tag = "Usuarios",
    responses(
        (status = 200, description = "Every stored usuario", body = Vec<UsuarioDto>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_usuarios(
    State(state): State<UsuarioHandlerState>,
) -> Result<Json<Vec<UsuarioDto>>, ApiError> {
    let usuarios = state.usuario_service.list().await?;
    Ok(Json(usuarios.into_iter().map(UsuarioDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/usuario/{id}",
    tag = "Usuarios",
    params(("id" = i32, Path, description = "Usuario ID")),
    responses(
        (status = 200, description = "Usuario details", body = UsuarioDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_usuario(
    State(state): State<UsuarioHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<UsuarioDto>, ApiError> {
    let usuario = state.usuario_service.get(parse_id(&id)?).await?;
    Ok(Json(usuario.into()))
}

#[utoipa::path(
    post,
    path = "/api/usuario",
    tag = "Usuarios",
    request_body = UsuarioRequest,
    responses(
        (status = 201, description = "Usuario created", body = UsuarioDto),
        (status = 400, description = "Malformed or invalid payload", body = ErrorBody)
    )
)]
pub async fn create_usuario(
    State(state): State<UsuarioHandlerState>,
    ValidatedJson(request): ValidatedJson<UsuarioRequest>,
) -> Result<(StatusCode, Json<UsuarioDto>), ApiError> {
    let usuario = state.usuario_service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(usuario.into())))
}

#[utoipa::path(
    put,
    path = "/api/usuario/{id}",
    tag = "Usuarios",
    params(("id" = i32, Path, description = "Usuario ID")),
    request_body = UsuarioRequest,
    responses(
        (status = 200, description = "Usuario replaced", body = UsuarioDto),
        (status = 400, description = "Malformed or invalid payload", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_usuario(
    State(state): State<UsuarioHandlerState>,
    Path(id): Path<String>,
    body: Result<ValidatedJson<UsuarioRequest>, ValidatedJsonRejection>,
) -> Result<Json<UsuarioDto>, ApiError> {
    let id = existing_id(&state, &id).await?;
    let ValidatedJson(request) = body?;
    let usuario = state.usuario_service.replace(id, request.into()).await?;
    Ok(Json(usuario.into()))
}

#[utoipa::path(
    patch,
    path = "/api/usuario/{id}",
    tag = "Usuarios",
    params(("id" = i32, Path, description = "Usuario ID")),
    request_body = PatchUsuarioRequest,
    responses(
        (status = 200, description = "Usuario updated", body = UsuarioDto),
        (status = 400, description = "Malformed or invalid payload", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn partial_update_usuario(
    State(state): State<UsuarioHandlerState>,
    Path(id): Path<String>,
    body: Result<ValidatedJson<PatchUsuarioRequest>, ValidatedJsonRejection>,
) -> Result<Json<UsuarioDto>, ApiError> {
    let id = existing_id(&state, &id).await?;
    let ValidatedJson(request) = body?;
    let usuario = state.usuario_service.partial_update(id, request.into()).await?;
    Ok(Json(usuario.into()))
}

#[utoipa::path(
    delete,
    path = "/api/usuario/{id}",
    tag = "Usuarios",
    params(("id" = i32, Path, description = "Usuario ID")),
    responses(
        (status = 204, description = "Usuario deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_usuario(
    State(state): State<UsuarioHandlerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.usuario_service.delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
