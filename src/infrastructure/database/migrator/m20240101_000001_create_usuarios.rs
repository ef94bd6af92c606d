//! Migration to create the usuario table
//!
//! `if_not_exists` lets the service open a database whose table was created
//! by an earlier deployment.

use sea_orm_migration::prelude::*;

use crate::domain::usuario::{APELLIDOS_MAX_LEN, NOMBRE_MAX_LEN};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::Nombre)
                            .string_len(NOMBRE_MAX_LEN as u32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::Apellidos)
                            .string_len(APELLIDOS_MAX_LEN as u32)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Usuarios {
    #[iden = "webapp_usuario"]
    Table,
    Id,
    Nombre,
    Apellidos,
}
