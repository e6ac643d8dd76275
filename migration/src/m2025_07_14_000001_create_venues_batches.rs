//! Migration to create the venues and batches tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Venues::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Venues::Name).text().not_null())
                    .col(ColumnDef::new(Venues::Location).text().not_null().default(""))
                    .col(ColumnDef::new(Venues::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(Venues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Venues::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Batches::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Batches::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Batches::VenueId).uuid().not_null())
                    .col(ColumnDef::new(Batches::Name).text().not_null())
                    .col(ColumnDef::new(Batches::StartDate).date().not_null())
                    .col(ColumnDef::new(Batches::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Batches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Batches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_batches_venue_id")
                            .from(Batches::Table, Batches::VenueId)
                            .to(Venues::Table, Venues::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_batches_venue_id")
                    .if_not_exists()
                    .table(Batches::Table)
                    .col(Batches::VenueId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Batches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Venues {
    Table,
    Id,
    Name,
    Location,
    Capacity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Batches {
    Table,
    Id,
    VenueId,
    Name,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}
