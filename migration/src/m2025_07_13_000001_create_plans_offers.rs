//! Migration to create the plans and offers tables.
//!
//! Offers attach to any number of plans through `plan_offers`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plans::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Plans::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Plans::Name).text().not_null())
                    .col(ColumnDef::new(Plans::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Plans::PriceCents).big_integer().not_null())
                    .col(ColumnDef::new(Plans::DurationDays).integer().not_null())
                    .col(
                        ColumnDef::new(Plans::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Plans::UpdatedAt)
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
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Offers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Offers::DiscountPct).double().not_null())
                    .col(ColumnDef::new(Offers::ValidFrom).date().not_null())
                    .col(ColumnDef::new(Offers::ValidTo).date().not_null())
                    .col(
                        ColumnDef::new(Offers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Offers::UpdatedAt)
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
                    .table(PlanOffers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PlanOffers::PlanId).uuid().not_null())
                    .col(ColumnDef::new(PlanOffers::OfferId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_plan_offers")
                            .col(PlanOffers::PlanId)
                            .col(PlanOffers::OfferId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_offers_plan_id")
                            .from(PlanOffers::Table, PlanOffers::PlanId)
                            .to(Plans::Table, Plans::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_offers_offer_id")
                            .from(PlanOffers::Table, PlanOffers::OfferId)
                            .to(Offers::Table, Offers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanOffers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Plans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Plans {
    Table,
    Id,
    Name,
    Description,
    PriceCents,
    DurationDays,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Offers {
    Table,
    Id,
    DiscountPct,
    ValidFrom,
    ValidTo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PlanOffers {
    Table,
    PlanId,
    OfferId,
}
