//! Usuario service — application-layer orchestration

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    CreateUsuarioDto, DomainError, DomainResult, UpdateUsuarioDto, Usuario,
    UsuarioRepositoryInterface,
};

/// Exposes the standard CRUD operations over any Usuario store.
///
/// Defaults to a trait object so HTTP state does not need to name the
/// concrete repository.
pub struct UsuarioService<R: UsuarioRepositoryInterface + ?Sized = dyn UsuarioRepositoryInterface>
{
    repo: Arc<R>,
}

impl<R: UsuarioRepositoryInterface + ?Sized> UsuarioService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Every stored Usuario.
    pub async fn list(&self) -> DomainResult<Vec<Usuario>> {
        let usuarios = self.repo.list_usuarios().await?;
        debug!(count = usuarios.len(), "Listed usuarios");
        Ok(usuarios)
    }

    pub async fn get(&self, id: i32) -> DomainResult<Usuario> {
        self.repo
            .get_usuario_by_id(id)
            .await?
            .ok_or_else(|| DomainError::usuario_not_found(id))
    }

    // ── Commands (mutations) ────────────────────────────────────

    pub async fn create(&self, dto: CreateUsuarioDto) -> DomainResult<Usuario> {
        let usuario = self.repo.create_usuario(dto).await?;
        info!(usuario_id = usuario.id, "Usuario created");
        Ok(usuario)
    }

    /// Overwrite every writable field.
    pub async fn replace(&self, id: i32, dto: CreateUsuarioDto) -> DomainResult<Usuario> {
        self.partial_update(id, dto.into()).await
    }

    /// Overwrite only the fields present in `dto`.
    pub async fn partial_update(&self, id: i32, dto: UpdateUsuarioDto) -> DomainResult<Usuario> {
        let usuario = self
            .repo
            .update_usuario(id, dto)
            .await?
            .ok_or_else(|| DomainError::usuario_not_found(id))?;
        info!(usuario_id = id, "Usuario updated");
        Ok(usuario)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repo.delete_usuario(id).await?;
        info!(usuario_id = id, "Usuario deleted");
        Ok(())
    }
}
