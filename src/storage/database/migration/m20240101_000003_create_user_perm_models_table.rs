use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPermModels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserPermModels::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(UserPermModels::System).string().not_null())
                    .col(ColumnDef::new(UserPermModels::Uid).string().not_null())
                    .col(ColumnDef::new(UserPermModels::Roles).json().not_null())
                    .col(ColumnDef::new(UserPermModels::Blacklist).json().not_null())
                    .col(ColumnDef::new(UserPermModels::Whitelist).json().not_null())
                    .col(
                        ColumnDef::new(UserPermModels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserPermModels::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One record per identity within a system
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uidx_user_perm_models_system_uid")
                    .table(UserPermModels::Table)
                    .col(UserPermModels::System)
                    .col(UserPermModels::Uid)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserPermModels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserPermModels {
    Table,
    Id,
    System,
    Uid,
    Roles,
    Blacklist,
    Whitelist,
    CreatedAt,
    UpdatedAt,
}
