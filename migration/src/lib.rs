//! Database migrations for the Spodemy academy backend.
//!
//! Steps run strictly in the order listed in [`Migrator::migrations`]; the
//! applied set is recorded in the `seaql_migrations` ledger table.

pub use sea_orm_migration::prelude::*;

mod m2025_07_12_000001_create_roles_users;
mod m2025_07_13_000001_create_plans_offers;
mod m2025_07_14_000001_create_venues_batches;
mod m2025_07_15_000001_create_enrollments_attendance;
mod m2025_07_16_000001_create_fee_payments;
mod m2025_07_17_000001_create_investments;
mod m2025_07_18_000001_create_courses_assessments;
mod m2025_07_19_000001_create_expenses;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_07_12_000001_create_roles_users::Migration),
            Box::new(m2025_07_13_000001_create_plans_offers::Migration),
            Box::new(m2025_07_14_000001_create_venues_batches::Migration),
            Box::new(m2025_07_15_000001_create_enrollments_attendance::Migration),
            Box::new(m2025_07_16_000001_create_fee_payments::Migration),
            Box::new(m2025_07_17_000001_create_investments::Migration),
            Box::new(m2025_07_18_000001_create_courses_assessments::Migration),
            Box::new(m2025_07_19_000001_create_expenses::Migration),
        ]
    }
}
