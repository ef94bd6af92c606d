//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    CreateUsuarioDto, DomainError, DomainResult, UpdateUsuarioDto, Usuario,
    UsuarioRepositoryInterface,
};

/// In-memory Usuario store for development and testing
pub struct InMemoryUsuarioRepository {
    usuarios: DashMap<i32, Usuario>,
    id_counter: AtomicI32,
}

impl InMemoryUsuarioRepository {
    pub fn new() -> Self {
        Self {
            usuarios: DashMap::new(),
            id_counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryUsuarioRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsuarioRepositoryInterface for InMemoryUsuarioRepository {
    async fn create_usuario(&self, dto: CreateUsuarioDto) -> DomainResult<Usuario> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let usuario = Usuario {
            id,
            nombre: dto.nombre,
            apellidos: dto.apellidos,
        };
        self.usuarios.insert(id, usuario.clone());
        Ok(usuario)
    }

    async fn list_usuarios(&self) -> DomainResult<Vec<Usuario>> {
        let mut usuarios: Vec<Usuario> = self
            .usuarios
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        usuarios.sort_by_key(|u| u.id);
        Ok(usuarios)
    }

    async fn get_usuario_by_id(&self, id: i32) -> DomainResult<Option<Usuario>> {
        Ok(self.usuarios.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update_usuario(
        &self,
        id: i32,
        dto: UpdateUsuarioDto,
    ) -> DomainResult<Option<Usuario>> {
        let Some(mut entry) = self.usuarios.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(nombre) = dto.nombre {
            entry.nombre = nombre;
        }
        if let Some(apellidos) = dto.apellidos {
            entry.apellidos = apellidos;
        }

        Ok(Some(entry.value().clone()))
    }

    async fn delete_usuario(&self, id: i32) -> DomainResult<()> {
        self.usuarios
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::usuario_not_found(id))
    }
}
