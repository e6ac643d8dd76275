//! Investment transaction repository
//!
//! Transactions are always addressed through their parent investment; the
//! investment id is fixed at creation and never rewritten by an update.

use chrono::{DateTime, FixedOffset};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::investment_transaction::{self, Entity as InvestmentTransaction};

/// Validated transaction fields.
///
/// A missing `txn_date` means "now" on create and "unchanged" on update.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub txn_type: crate::models::TransactionType,
    pub units: i32,
    pub price_cents: i64,
    pub transaction_ref: String,
    pub txn_date: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone)]
pub struct InvestmentTransactionRepository {
    pub db: Arc<DatabaseConnection>,
}

impl InvestmentTransactionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<investment_transaction::Model>, RepositoryError> {
        Ok(InvestmentTransaction::find()
            .order_by_asc(investment_transaction::Column::TxnDate)
            .order_by_asc(investment_transaction::Column::CreatedAt)
            .all(&*self.db)
            .await?)
    }

    /// Lists an investment's transactions, oldest first
    pub async fn find_by_investment(
        &self,
        investment_id: Uuid,
    ) -> Result<Vec<investment_transaction::Model>, RepositoryError> {
        Ok(InvestmentTransaction::find()
            .filter(investment_transaction::Column::InvestmentId.eq(investment_id))
            .order_by_asc(investment_transaction::Column::TxnDate)
            .order_by_asc(investment_transaction::Column::CreatedAt)
            .all(&*self.db)
            .await?)
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<investment_transaction::Model, RepositoryError> {
        InvestmentTransaction::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("investment_transaction", id))
    }

    pub async fn create(
        &self,
        investment_id: Uuid,
        input: NewTransaction,
    ) -> Result<investment_transaction::Model, RepositoryError> {
        let now = timestamp_now();
        let model = investment_transaction::ActiveModel {
            id: Set(Uuid::new_v4()),
            investment_id: Set(investment_id),
            txn_type: Set(input.txn_type),
            units: Set(input.units),
            price_cents: Set(input.price_cents),
            transaction_ref: Set(input.transaction_ref),
            txn_date: Set(input.txn_date.unwrap_or(now)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: NewTransaction,
    ) -> Result<investment_transaction::Model, RepositoryError> {
        let existing = self.find_by_id(id).await?;
        let mut model: investment_transaction::ActiveModel = existing.clone().into();
        model.txn_type.set_if_not_equals(input.txn_type);
        model.units.set_if_not_equals(input.units);
        model.price_cents.set_if_not_equals(input.price_cents);
        model.transaction_ref.set_if_not_equals(input.transaction_ref);
        if let Some(txn_date) = input.txn_date {
            model.txn_date.set_if_not_equals(txn_date);
        }

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = InvestmentTransaction::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("investment_transaction", id));
        }
        Ok(())
    }
}
