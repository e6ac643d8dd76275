//! # Repository Layer
//!
//! Repository implementations that encapsulate SeaORM operations for each
//! academy entity. Every repository is handed the shared connection pool at
//! construction; reads of entities with relations take an explicit include
//! list naming which related rows to eager-load.

use chrono::{DateTime, FixedOffset, Utc};

pub mod assessment;
pub mod attendance;
pub mod batch;
pub mod course;
pub mod enrollment;
pub mod expense;
pub mod fee_payment;
pub mod investment;
pub mod investment_transaction;
pub mod offer;
pub mod plan;
pub mod role;
pub mod user;
pub mod venue;

pub use assessment::{AssessmentInclude, AssessmentRepository};
pub use attendance::{AttendanceInclude, AttendanceRepository};
pub use batch::{BatchInclude, BatchRepository, NewBatch};
pub use course::{CourseInclude, CourseRepository};
pub use enrollment::{EnrollmentInclude, EnrollmentRepository};
pub use expense::ExpenseRepository;
pub use fee_payment::{FeePaymentInclude, FeePaymentRepository};
pub use investment::{InvestmentInclude, InvestmentRepository};
pub use investment_transaction::{InvestmentTransactionRepository, NewTransaction};
pub use offer::{OfferInclude, OfferRepository};
pub use plan::{PlanInclude, PlanRepository};
pub use role::RoleRepository;
pub use user::{UserInclude, UserRepository};
pub use venue::VenueRepository;

/// Server-assigned timestamp for `created_at` / `updated_at`
pub(crate) fn timestamp_now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}
