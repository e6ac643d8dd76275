//! Migration to create the investments and investment_transactions tables.
//!
//! An investment is an investor's stake in a venue; each buy or sell against
//! it is recorded as a transaction row.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Investments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Investments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Investments::VenueId).uuid().not_null())
                    .col(ColumnDef::new(Investments::InvestorId).uuid().not_null())
                    .col(ColumnDef::new(Investments::Units).integer().not_null())
                    .col(
                        ColumnDef::new(Investments::AvgPriceCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Investments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Investments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investments_venue_id")
                            .from(Investments::Table, Investments::VenueId)
                            .to(Venues::Table, Venues::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investments_investor_id")
                            .from(Investments::Table, Investments::InvestorId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_investments_venue_id")
                    .if_not_exists()
                    .table(Investments::Table)
                    .col(Investments::VenueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_investments_investor_id")
                    .if_not_exists()
                    .table(Investments::Table)
                    .col(Investments::InvestorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InvestmentTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InvestmentTransactions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InvestmentTransactions::InvestmentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestmentTransactions::Type)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestmentTransactions::Units)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestmentTransactions::PriceCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestmentTransactions::TransactionRef)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(InvestmentTransactions::TxnDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestmentTransactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(InvestmentTransactions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investment_transactions_investment_id")
                            .from(
                                InvestmentTransactions::Table,
                                InvestmentTransactions::InvestmentId,
                            )
                            .to(Investments::Table, Investments::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_investment_transactions_investment_id")
                    .if_not_exists()
                    .table(InvestmentTransactions::Table)
                    .col(InvestmentTransactions::InvestmentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InvestmentTransactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Investments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Investments {
    Table,
    Id,
    VenueId,
    InvestorId,
    Units,
    AvgPriceCents,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InvestmentTransactions {
    Table,
    Id,
    InvestmentId,
    Type,
    Units,
    PriceCents,
    TransactionRef,
    TxnDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Venues {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
