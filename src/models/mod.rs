//! # Data Models
//!
//! SeaORM entities for every table of the academy schema, together with the
//! request bodies (`Input`) and eager-loaded views (`Details`) the API exposes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

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
pub mod plan_offer;
pub mod role;
pub mod user;
pub mod user_role;
pub mod venue;

pub use assessment::Entity as Assessment;
pub use attendance::{AttendanceStatus, Entity as Attendance};
pub use batch::Entity as Batch;
pub use course::Entity as Course;
pub use enrollment::{Entity as Enrollment, EnrollmentStatus};
pub use expense::Entity as Expense;
pub use fee_payment::Entity as FeePayment;
pub use investment::Entity as Investment;
pub use investment_transaction::{Entity as InvestmentTransaction, TransactionType};
pub use offer::Entity as Offer;
pub use plan::Entity as Plan;
pub use plan_offer::Entity as PlanOffer;
pub use role::Entity as Role;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;
pub use venue::Entity as Venue;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "spodemy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness / readiness probe body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: String,
}
