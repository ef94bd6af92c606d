use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{
    CreateUsuarioDto, DomainError, DomainResult, UpdateUsuarioDto, Usuario,
    UsuarioRepositoryInterface,
};
use crate::infrastructure::database::entities::usuario;

pub struct SeaOrmUsuarioRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsuarioRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn usuario_model_to_domain(model: usuario::Model) -> Usuario {
    Usuario {
        id: model.id,
        nombre: model.nombre,
        apellidos: model.apellidos,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UsuarioRepositoryInterface for SeaOrmUsuarioRepository {
    async fn create_usuario(&self, dto: CreateUsuarioDto) -> DomainResult<Usuario> {
        let new_usuario = usuario::ActiveModel {
            nombre: Set(dto.nombre),
            apellidos: Set(dto.apellidos),
            ..Default::default()
        };

        let model = new_usuario.insert(&self.db).await?;
        Ok(usuario_model_to_domain(model))
    }

    async fn list_usuarios(&self) -> DomainResult<Vec<Usuario>> {
        let models = usuario::Entity::find()
            .order_by_asc(usuario::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(usuario_model_to_domain).collect())
    }

    async fn get_usuario_by_id(&self, id: i32) -> DomainResult<Option<Usuario>> {
        let model = usuario::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(usuario_model_to_domain))
    }

    async fn update_usuario(
        &self,
        id: i32,
        dto: UpdateUsuarioDto,
    ) -> DomainResult<Option<Usuario>> {
        let Some(existing) = usuario::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        if dto.is_empty() {
            return Ok(Some(usuario_model_to_domain(existing)));
        }

        let mut active: usuario::ActiveModel = existing.into();
        if let Some(nombre) = dto.nombre {
            active.nombre = Set(nombre);
        }
        if let Some(apellidos) = dto.apellidos {
            active.apellidos = Set(apellidos);
        }

        let updated = active.update(&self.db).await?;
        Ok(Some(usuario_model_to_domain(updated)))
    }

    async fn delete_usuario(&self, id: i32) -> DomainResult<()> {
        let result = usuario::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::usuario_not_found(id));
        }

        Ok(())
    }
}
