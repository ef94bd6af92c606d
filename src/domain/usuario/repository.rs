use async_trait::async_trait;

use super::{CreateUsuarioDto, UpdateUsuarioDto, Usuario};
use crate::domain::DomainResult;

#[async_trait]
pub trait UsuarioRepositoryInterface: Send + Sync {
    async fn create_usuario(&self, dto: CreateUsuarioDto) -> DomainResult<Usuario>;

    /// Every stored record, ascending by id.
    async fn list_usuarios(&self) -> DomainResult<Vec<Usuario>>;
    async fn get_usuario_by_id(&self, id: i32) -> DomainResult<Option<Usuario>>;

    async fn update_usuario(&self, id: i32, dto: UpdateUsuarioDto)
        -> DomainResult<Option<Usuario>>;
    async fn delete_usuario(&self, id: i32) -> DomainResult<()>;
}
