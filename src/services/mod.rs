//! # Services
//!
//! One service per entity. Each forwards to its repository after applying the
//! domain checks that the schema alone cannot express.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub mod assessment;
pub mod attendance;
pub mod batch;
pub mod course;
pub mod enrollment;
pub mod expense;
pub mod investment;
pub mod offer;
pub mod payment;
pub mod plan;
pub mod role;
pub mod user;
pub mod validation;
pub mod venue;

pub use assessment::AssessmentService;
pub use attendance::AttendanceService;
pub use batch::BatchService;
pub use course::CourseService;
pub use enrollment::EnrollmentService;
pub use expense::ExpenseService;
pub use investment::InvestmentService;
pub use offer::OfferService;
pub use payment::PaymentService;
pub use plan::PlanService;
pub use role::RoleService;
pub use user::UserService;
pub use venue::VenueService;

/// Every entity service, wired to one shared connection pool.
#[derive(Debug, Clone)]
pub struct Services {
    pub users: UserService,
    pub roles: RoleService,
    pub venues: VenueService,
    pub batches: BatchService,
    pub enrollments: EnrollmentService,
    pub attendance: AttendanceService,
    pub payments: PaymentService,
    pub investments: InvestmentService,
    pub plans: PlanService,
    pub offers: OfferService,
    pub expenses: ExpenseService,
    pub courses: CourseService,
    pub assessments: AssessmentService,
}

impl Services {
    pub fn new(db: DatabaseConnection) -> Self {
        let db = Arc::new(db);
        Self {
            users: UserService::new(db.clone()),
            roles: RoleService::new(db.clone()),
            venues: VenueService::new(db.clone()),
            batches: BatchService::new(db.clone()),
            enrollments: EnrollmentService::new(db.clone()),
            attendance: AttendanceService::new(db.clone()),
            payments: PaymentService::new(db.clone()),
            investments: InvestmentService::new(db.clone()),
            plans: PlanService::new(db.clone()),
            offers: OfferService::new(db.clone()),
            expenses: ExpenseService::new(db.clone()),
            courses: CourseService::new(db.clone()),
            assessments: AssessmentService::new(db),
        }
    }
}
