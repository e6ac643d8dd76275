//! Investments and their buy/sell ledger.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::validation;
use crate::error::RepositoryError;
use crate::models::{investment, investment_transaction};
use crate::repositories::{
    InvestmentInclude, InvestmentRepository, InvestmentTransactionRepository, NewTransaction,
};

const INCLUDE: &[InvestmentInclude] = &[InvestmentInclude::Venue, InvestmentInclude::Investor];

#[derive(Debug, Clone)]
pub struct InvestmentService {
    repo: InvestmentRepository,
    transactions: InvestmentTransactionRepository,
}

impl InvestmentService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repo: InvestmentRepository::new(db.clone()),
            transactions: InvestmentTransactionRepository::new(db),
        }
    }

    pub async fn list(&self) -> Result<Vec<investment::Details>, RepositoryError> {
        self.repo.find_all(INCLUDE).await
    }

    pub async fn list_for_investor(
        &self,
        investor_id: Uuid,
    ) -> Result<Vec<investment::Details>, RepositoryError> {
        self.repo.find_by_investor(investor_id, INCLUDE).await
    }

    pub async fn get(&self, id: Uuid) -> Result<investment::Details, RepositoryError> {
        self.repo.find_by_id(id, INCLUDE).await
    }

    pub async fn create(
        &self,
        input: investment::Input,
    ) -> Result<investment::Model, RepositoryError> {
        validate(&input)?;
        self.repo.create(input).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: investment::Input,
    ) -> Result<investment::Model, RepositoryError> {
        validate(&input)?;
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.delete(id).await
    }

    pub async fn list_transactions(
        &self,
        investment_id: Uuid,
    ) -> Result<Vec<investment_transaction::Model>, RepositoryError> {
        self.transactions.find_by_investment(investment_id).await
    }

    /// Fetches a transaction, treating one filed under another investment as
    /// missing.
    pub async fn get_transaction(
        &self,
        investment_id: Uuid,
        txn_id: Uuid,
    ) -> Result<investment_transaction::Model, RepositoryError> {
        let txn = self.transactions.find_by_id(txn_id).await?;
        if txn.investment_id != investment_id {
            return Err(RepositoryError::not_found("investment_transaction", txn_id));
        }
        Ok(txn)
    }

    pub async fn create_transaction(
        &self,
        investment_id: Uuid,
        input: investment_transaction::Input,
    ) -> Result<investment_transaction::Model, RepositoryError> {
        let txn = resolve_transaction(input)?;
        self.transactions.create(investment_id, txn).await
    }

    pub async fn update_transaction(
        &self,
        investment_id: Uuid,
        txn_id: Uuid,
        input: investment_transaction::Input,
    ) -> Result<investment_transaction::Model, RepositoryError> {
        let txn = resolve_transaction(input)?;
        self.get_transaction(investment_id, txn_id).await?;
        self.transactions.update(txn_id, txn).await
    }

    pub async fn delete_transaction(
        &self,
        investment_id: Uuid,
        txn_id: Uuid,
    ) -> Result<(), RepositoryError> {
        self.get_transaction(investment_id, txn_id).await?;
        self.transactions.delete(txn_id).await
    }
}

fn validate(input: &investment::Input) -> Result<(), RepositoryError> {
    validation::non_negative("units", input.units)?;
    validation::non_negative("avg_price_cents", input.avg_price_cents)
}

fn resolve_transaction(
    input: investment_transaction::Input,
) -> Result<NewTransaction, RepositoryError> {
    validation::positive("units", input.units)?;
    validation::non_negative("price_cents", input.price_cents)?;

    Ok(NewTransaction {
        txn_type: input.txn_type,
        units: input.units,
        price_cents: input.price_cents,
        transaction_ref: input.transaction_ref,
        txn_date: input.txn_date,
    })
}
