//! # Server Configuration
//!
//! Router assembly, shared application state and the HTTP listener for the
//! academy API.

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    routing::{MethodRouter, get, post, put},
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{
    ADMIN, ADMIN_OR_COACH, ADMIN_OR_INVESTOR, JwtKeys, RoleName, auth_middleware,
    require_any_role,
};
use crate::config::AppConfig;
use crate::handlers::{
    self, assessments, attendance, auth, batches, courses, enrollments, expenses, health,
    investments, offers, payments, plans, roles, users, venues,
};
use crate::services::Services;
use crate::telemetry::trace_id_middleware;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
    pub jwt: Arc<JwtKeys>,
    pub services: Arc<Services>,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Self {
        let jwt = Arc::new(JwtKeys::from_config(&config));
        let services = Arc::new(Services::new(db.clone()));
        Self {
            config: Arc::new(config),
            db,
            jwt,
            services,
        }
    }
}

/// Restricts a method router to callers holding one of `allowed`.
fn guarded(route: MethodRouter<AppState>, allowed: &'static [RoleName]) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn(
        move |request: Request, next: Next| require_any_role(allowed, request, next),
    ))
}

/// Authenticated `/api/v1` routes. Reads are open to any caller with a valid
/// token; mutations carry a role allow-list.
fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(users::list_users).merge(guarded(post(users::create_user), ADMIN)),
        )
        .route(
            "/users/{id}",
            get(users::get_user).merge(guarded(
                put(users::update_user).delete(users::delete_user),
                ADMIN,
            )),
        )
        .route("/users/{id}/enrollments", get(users::list_user_enrollments))
        .route("/users/{id}/courses", get(users::list_user_courses))
        .route("/users/{id}/assessments", get(users::list_user_assessments))
        .route("/users/{id}/investments", get(users::list_user_investments))
        .route(
            "/roles",
            get(roles::list_roles).merge(guarded(post(roles::create_role), ADMIN)),
        )
        .route(
            "/roles/{id}",
            get(roles::get_role).merge(guarded(
                put(roles::update_role).delete(roles::delete_role),
                ADMIN,
            )),
        )
        .route(
            "/venues",
            get(venues::list_venues).merge(guarded(post(venues::create_venue), ADMIN)),
        )
        .route(
            "/venues/{id}",
            get(venues::get_venue).merge(guarded(
                put(venues::update_venue).delete(venues::delete_venue),
                ADMIN,
            )),
        )
        .route(
            "/venues/{venue_id}/batches",
            get(venues::list_venue_batches)
                .merge(guarded(post(venues::create_venue_batch), ADMIN)),
        )
        .route("/batches", get(batches::list_batches))
        .route(
            "/batches/{id}",
            get(batches::get_batch).merge(guarded(
                put(batches::update_batch).delete(batches::delete_batch),
                ADMIN,
            )),
        )
        .route(
            "/batches/{batch_id}/enrollments",
            get(batches::list_batch_enrollments),
        )
        .route(
            "/enrollments",
            get(enrollments::list_enrollments)
                .merge(guarded(post(enrollments::create_enrollment), ADMIN_OR_COACH)),
        )
        .route(
            "/enrollments/{id}",
            get(enrollments::get_enrollment).merge(guarded(
                put(enrollments::update_enrollment).delete(enrollments::delete_enrollment),
                ADMIN_OR_COACH,
            )),
        )
        .route(
            "/enrollments/{enrollment_id}/attendance",
            get(enrollments::list_enrollment_attendance),
        )
        .route(
            "/enrollments/{enrollment_id}/payments",
            get(enrollments::list_enrollment_payments),
        )
        .route(
            "/attendance",
            get(attendance::list_attendance)
                .merge(guarded(post(attendance::create_attendance), ADMIN_OR_COACH)),
        )
        .route(
            "/attendance/{id}",
            get(attendance::get_attendance).merge(guarded(
                put(attendance::update_attendance).delete(attendance::delete_attendance),
                ADMIN_OR_COACH,
            )),
        )
        .route(
            "/payments",
            get(payments::list_payments).merge(guarded(post(payments::create_payment), ADMIN)),
        )
        .route(
            "/payments/{id}",
            get(payments::get_payment).merge(guarded(
                put(payments::update_payment).delete(payments::delete_payment),
                ADMIN,
            )),
        )
        .route(
            "/investments",
            get(investments::list_investments).merge(guarded(
                post(investments::create_investment),
                ADMIN_OR_INVESTOR,
            )),
        )
        .route(
            "/investments/{id}",
            get(investments::get_investment).merge(guarded(
                put(investments::update_investment).delete(investments::delete_investment),
                ADMIN_OR_INVESTOR,
            )),
        )
        .route(
            "/investments/{id}/transactions",
            get(investments::list_transactions).merge(guarded(
                post(investments::create_transaction),
                ADMIN_OR_INVESTOR,
            )),
        )
        .route(
            "/investments/{id}/transactions/{txn_id}",
            get(investments::get_transaction).merge(guarded(
                put(investments::update_transaction).delete(investments::delete_transaction),
                ADMIN_OR_INVESTOR,
            )),
        )
        .route(
            "/plans",
            get(plans::list_plans).merge(guarded(post(plans::create_plan), ADMIN)),
        )
        .route(
            "/plans/{id}",
            get(plans::get_plan).merge(guarded(
                put(plans::update_plan).delete(plans::delete_plan),
                ADMIN,
            )),
        )
        .route(
            "/plans/{id}/offers/{offer_id}",
            guarded(
                put(plans::attach_offer).delete(plans::detach_offer),
                ADMIN,
            ),
        )
        .route(
            "/offers",
            get(offers::list_offers).merge(guarded(post(offers::create_offer), ADMIN)),
        )
        .route(
            "/offers/{id}",
            get(offers::get_offer).merge(guarded(
                put(offers::update_offer).delete(offers::delete_offer),
                ADMIN,
            )),
        )
        .route(
            "/expenses",
            get(expenses::list_expenses).merge(guarded(post(expenses::create_expense), ADMIN)),
        )
        .route(
            "/expenses/{id}",
            get(expenses::get_expense).merge(guarded(
                put(expenses::update_expense).delete(expenses::delete_expense),
                ADMIN,
            )),
        )
        .route(
            "/courses",
            get(courses::list_courses)
                .merge(guarded(post(courses::create_course), ADMIN_OR_COACH)),
        )
        .route(
            "/courses/{id}",
            get(courses::get_course).merge(guarded(
                put(courses::update_course).delete(courses::delete_course),
                ADMIN_OR_COACH,
            )),
        )
        .route(
            "/courses/{id}/assessments",
            get(courses::list_course_assessments),
        )
        .route(
            "/assessments",
            get(assessments::list_assessments)
                .merge(guarded(post(assessments::create_assessment), ADMIN_OR_COACH)),
        )
        .route(
            "/assessments/{id}",
            get(assessments::get_assessment).merge(guarded(
                put(assessments::update_assessment).delete(assessments::delete_assessment),
                ADMIN_OR_COACH,
            )),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        // Added after the auth layer so login stays public.
        .route("/auth/login", post(auth::login))
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    let api = api_routes(&state);

    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .nest("/api/v1", api)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(trace_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Starts the server with the given state
pub async fn run_server(state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let addr = state
        .config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;
    let profile = state.config.profile.clone();

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, %profile, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

/// Registers the `bearer_auth` scheme referenced by protected paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        health::healthz,
        health::readyz,
        auth::login,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::list_user_enrollments,
        users::list_user_courses,
        users::list_user_assessments,
        users::list_user_investments,
        roles::list_roles,
        roles::get_role,
        roles::create_role,
        roles::update_role,
        roles::delete_role,
        venues::list_venues,
        venues::get_venue,
        venues::create_venue,
        venues::update_venue,
        venues::delete_venue,
        venues::list_venue_batches,
        venues::create_venue_batch,
        batches::list_batches,
        batches::get_batch,
        batches::update_batch,
        batches::delete_batch,
        batches::list_batch_enrollments,
        enrollments::list_enrollments,
        enrollments::get_enrollment,
        enrollments::create_enrollment,
        enrollments::update_enrollment,
        enrollments::delete_enrollment,
        enrollments::list_enrollment_attendance,
        enrollments::list_enrollment_payments,
        attendance::list_attendance,
        attendance::get_attendance,
        attendance::create_attendance,
        attendance::update_attendance,
        attendance::delete_attendance,
        payments::list_payments,
        payments::get_payment,
        payments::create_payment,
        payments::update_payment,
        payments::delete_payment,
        investments::list_investments,
        investments::get_investment,
        investments::create_investment,
        investments::update_investment,
        investments::delete_investment,
        investments::list_transactions,
        investments::create_transaction,
        investments::get_transaction,
        investments::update_transaction,
        investments::delete_transaction,
        plans::list_plans,
        plans::get_plan,
        plans::create_plan,
        plans::update_plan,
        plans::delete_plan,
        plans::attach_offer,
        plans::detach_offer,
        offers::list_offers,
        offers::get_offer,
        offers::create_offer,
        offers::update_offer,
        offers::delete_offer,
        expenses::list_expenses,
        expenses::get_expense,
        expenses::create_expense,
        expenses::update_expense,
        expenses::delete_expense,
        courses::list_courses,
        courses::get_course,
        courses::create_course,
        courses::update_course,
        courses::delete_course,
        courses::list_course_assessments,
        assessments::list_assessments,
        assessments::get_assessment,
        assessments::create_assessment,
        assessments::update_assessment,
        assessments::delete_assessment,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::HealthStatus,
            crate::error::ApiError,
            crate::handlers::types::LoginRequest,
            crate::handlers::types::LoginResponse,
            crate::models::EnrollmentStatus,
            crate::models::AttendanceStatus,
            crate::models::TransactionType,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Token issuance"),
        (name = "users", description = "Users and their role sets"),
        (name = "venues", description = "Training venues"),
        (name = "batches", description = "Training batches held at venues"),
        (name = "enrollments", description = "Student enrollments in batches"),
        (name = "plans", description = "Fee plans and attached offers"),
        (name = "investments", description = "Venue investments and transactions"),
    ),
    info(
        title = "Spodemy API",
        description = "Academy management API: people, venues, batches, fees and investments",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_bearer_scheme_and_core_paths() {
        let doc = ApiDoc::openapi();
        let components = doc.components.as_ref().unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));

        for path in [
            "/api/v1/auth/login",
            "/api/v1/venues/{venue_id}/batches",
            "/api/v1/plans/{id}/offers/{offer_id}",
            "/api/v1/investments/{id}/transactions",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
