//! Migration to create the fee_payments table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeePayments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeePayments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FeePayments::EnrollmentId).uuid().not_null())
                    .col(ColumnDef::new(FeePayments::AmountCents).big_integer().not_null())
                    .col(ColumnDef::new(FeePayments::PaidOn).date().not_null())
                    .col(ColumnDef::new(FeePayments::Method).text().not_null())
                    .col(
                        ColumnDef::new(FeePayments::TransactionRef)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(FeePayments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(FeePayments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fee_payments_enrollment_id")
                            .from(FeePayments::Table, FeePayments::EnrollmentId)
                            .to(Enrollments::Table, Enrollments::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fee_payments_enrollment_id")
                    .if_not_exists()
                    .table(FeePayments::Table)
                    .col(FeePayments::EnrollmentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeePayments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FeePayments {
    Table,
    Id,
    EnrollmentId,
    AmountCents,
    PaidOn,
    Method,
    TransactionRef,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    Table,
    Id,
}
