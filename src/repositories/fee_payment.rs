//! Fee payment repository for database operations

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timestamp_now;
use crate::error::RepositoryError;
use crate::models::enrollment::Entity as Enrollment;
use crate::models::fee_payment::{self, Entity as FeePayment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeePaymentInclude {
    Enrollment,
}

#[derive(Debug, Clone)]
pub struct FeePaymentRepository {
    pub db: Arc<DatabaseConnection>,
}

impl FeePaymentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_all(
        &self,
        include: &[FeePaymentInclude],
    ) -> Result<Vec<fee_payment::Details>, RepositoryError> {
        self.fetch(FeePayment::find(), include).await
    }

    pub async fn find_by_enrollment(
        &self,
        enrollment_id: Uuid,
        include: &[FeePaymentInclude],
    ) -> Result<Vec<fee_payment::Details>, RepositoryError> {
        self.fetch(
            FeePayment::find().filter(fee_payment::Column::EnrollmentId.eq(enrollment_id)),
            include,
        )
        .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        include: &[FeePaymentInclude],
    ) -> Result<fee_payment::Details, RepositoryError> {
        let mut details = self.fetch(FeePayment::find_by_id(id), include).await?;
        details
            .pop()
            .ok_or_else(|| RepositoryError::not_found("payment", id))
    }

    pub async fn create(
        &self,
        input: fee_payment::Input,
    ) -> Result<fee_payment::Model, RepositoryError> {
        let now = timestamp_now();
        let model = fee_payment::ActiveModel {
            id: Set(Uuid::new_v4()),
            enrollment_id: Set(input.enrollment_id),
            amount_cents: Set(input.amount_cents),
            paid_on: Set(input.paid_on),
            method: Set(input.method),
            transaction_ref: Set(input.transaction_ref),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: fee_payment::Input,
    ) -> Result<fee_payment::Model, RepositoryError> {
        let existing = FeePayment::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| RepositoryError::not_found("payment", id))?;
        let mut model: fee_payment::ActiveModel = existing.clone().into();
        model.enrollment_id.set_if_not_equals(input.enrollment_id);
        model.amount_cents.set_if_not_equals(input.amount_cents);
        model.paid_on.set_if_not_equals(input.paid_on);
        model.method.set_if_not_equals(input.method);
        model.transaction_ref.set_if_not_equals(input.transaction_ref);

        if !model.is_changed() {
            return Ok(existing);
        }
        model.updated_at = Set(timestamp_now());
        Ok(model.update(&*self.db).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = FeePayment::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found("payment", id));
        }
        Ok(())
    }

    async fn fetch(
        &self,
        select: Select<FeePayment>,
        include: &[FeePaymentInclude],
    ) -> Result<Vec<fee_payment::Details>, RepositoryError> {
        let payments = select
            .order_by_asc(fee_payment::Column::PaidOn)
            .order_by_asc(fee_payment::Column::CreatedAt)
            .all(&*self.db)
            .await?;
        let mut details: Vec<fee_payment::Details> =
            payments.iter().cloned().map(Into::into).collect();

        if include.contains(&FeePaymentInclude::Enrollment) {
            let enrollments = payments.load_one(Enrollment, &*self.db).await?;
            for (detail, enrollment) in details.iter_mut().zip(enrollments) {
                detail.enrollment = enrollment;
            }
        }

        Ok(details)
    }
}
