//! End-to-end tests driving the full router against in-memory SQLite.

mod test_utils;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use test_utils::{TestApp, id_of};
use uuid::Uuid;

async fn create_venue(app: &TestApp, name: &str) -> Uuid {
    let (status, body) = app
        .post(
            "/api/v1/venues",
            &app.admin_token(),
            json!({ "name": name, "location": "North Campus", "capacity": 40 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    id_of(&body)
}

async fn create_batch(app: &TestApp, venue_id: Uuid) -> Uuid {
    let (status, body) = app
        .post(
            &format!("/api/v1/venues/{venue_id}/batches"),
            &app.admin_token(),
            json!({ "name": "Morning", "start_date": "2025-01-06", "end_date": "2025-03-28" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    id_of(&body)
}

async fn create_enrollment(app: &TestApp, student_id: Uuid, batch_id: Uuid) -> Uuid {
    let (status, body) = app
        .post(
            "/api/v1/enrollments",
            &app.token(&["coach"]),
            json!({ "student_id": student_id, "batch_id": batch_id, "enrolled_on": "2025-01-06" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    id_of(&body)
}

#[tokio::test]
async fn public_endpoints_need_no_token() {
    let app = TestApp::spawn().await.unwrap();

    let (status, body) = app.send(Method::GET, "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "spodemy");

    let (status, body) = app.send(Method::GET, "/healthz", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.send(Method::GET, "/readyz", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    let (status, body) = app.send(Method::GET, "/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/venues"].is_object());
}

#[tokio::test]
async fn missing_or_invalid_token_is_unauthorized() {
    let app = TestApp::spawn().await.unwrap();

    let (status, body) = app.send(Method::GET, "/api/v1/venues", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, _) = app.get("/api/v1/venues", "not-a-token").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_unauthorized() {
    let app = TestApp::spawn().await.unwrap();
    let now = chrono::Utc::now().timestamp();
    let token = app
        .state
        .jwt
        .encode(&spodemy::auth::Claims {
            sub: Uuid::new_v4(),
            email: "old@example.com".to_string(),
            roles: vec!["admin".to_string()],
            iat: now - 7200,
            exp: now - 60,
            iss: None,
        })
        .unwrap();

    let (status, _) = app.get("/api/v1/venues", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn role_allow_lists_gate_mutations_not_reads() {
    let app = TestApp::spawn().await.unwrap();
    let student = app.token(&["student"]);

    let (status, body) = app
        .post(
            "/api/v1/venues",
            &student,
            json!({ "name": "Court", "capacity": 10 }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, body) = app.get("/api/v1/venues", &student).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // Coaches manage courses but not investments.
    let coach = app.token(&["coach"]);
    let coach_id = app.create_user("coach@example.com", &["coach"]).await;
    let (status, _) = app
        .post(
            "/api/v1/courses",
            &coach,
            json!({ "coach_id": coach_id, "title": "Footwork" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let venue_id = create_venue(&app, "Arena").await;
    let (status, _) = app
        .post(
            "/api/v1/investments",
            &coach,
            json!({ "venue_id": venue_id, "investor_id": coach_id, "units": 1, "avg_price_cents": 100 }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn malformed_uuid_and_unknown_enum_are_bad_requests() {
    let app = TestApp::spawn().await.unwrap();
    let admin = app.admin_token();

    let (status, body) = app.get("/api/v1/venues/not-a-uuid", &admin).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (status, _) = app
        .post(
            "/api/v1/attendance",
            &admin,
            json!({ "enrollment_id": Uuid::new_v4(), "date": "2025-01-07", "status": "late" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn venue_crud_lifecycle() {
    let app = TestApp::spawn().await.unwrap();
    let admin = app.admin_token();
    let venue_id = create_venue(&app, "Riverside").await;

    let (status, created) = app.get(&format!("/api/v1/venues/{venue_id}"), &admin).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Riverside");

    // Same values leave the row untouched.
    let (status, unchanged) = app
        .put(
            &format!("/api/v1/venues/{venue_id}"),
            &admin,
            json!({ "name": "Riverside", "location": "North Campus", "capacity": 40 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged["updated_at"], created["updated_at"]);

    let (status, updated) = app
        .put(
            &format!("/api/v1/venues/{venue_id}"),
            &admin,
            json!({ "name": "Riverside Hall", "location": "North Campus", "capacity": 55 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["capacity"], 55);

    let (status, body) = app.delete(&format!("/api/v1/venues/{venue_id}"), &admin).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = app.get(&format!("/api/v1/venues/{venue_id}"), &admin).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = app.delete(&format!("/api/v1/venues/{venue_id}"), &admin).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validation_failures_return_field_details() {
    let app = TestApp::spawn().await.unwrap();
    let admin = app.admin_token();

    let (status, body) = app
        .post(
            "/api/v1/venues",
            &admin,
            json!({ "name": "  ", "capacity": 10 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "name");

    let venue_id = create_venue(&app, "Hall").await;
    let (status, body) = app
        .post(
            &format!("/api/v1/venues/{venue_id}/batches"),
            &admin,
            json!({ "name": "Backwards", "start_date": "2025-05-01", "end_date": "2025-04-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "end_date");

    let (status, body) = app
        .post(
            "/api/v1/offers",
            &admin,
            json!({ "discount_pct": 120.0, "valid_from": "2025-01-01", "valid_to": "2025-02-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "discount_pct");
}

#[tokio::test]
async fn nested_batches_enrollments_attendance_and_payments() {
    let app = TestApp::spawn().await.unwrap();
    let admin = app.admin_token();
    let coach = app.token(&["coach"]);

    let venue_id = create_venue(&app, "Ground A").await;
    let batch_id = create_batch(&app, venue_id).await;

    let (status, batches) = app
        .get(&format!("/api/v1/venues/{venue_id}/batches"), &admin)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(batches.as_array().unwrap().len(), 1);
    assert_eq!(batches[0]["venue_id"], venue_id.to_string());

    let student_id = app.create_user("kid@example.com", &["student"]).await;
    let enrollment_id = create_enrollment(&app, student_id, batch_id).await;

    let (_, enrollment) = app
        .get(&format!("/api/v1/enrollments/{enrollment_id}"), &admin)
        .await;
    assert_eq!(enrollment["status"], "active");
    assert_eq!(enrollment["student"]["email"], "kid@example.com");
    assert!(enrollment["student"].get("password_hash").is_none());

    let (_, listed) = app
        .get(&format!("/api/v1/batches/{batch_id}/enrollments"), &admin)
        .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = app
        .post(
            "/api/v1/attendance",
            &coach,
            json!({ "enrollment_id": enrollment_id, "date": "2025-01-07", "status": "present" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, attendance) = app
        .get(
            &format!("/api/v1/enrollments/{enrollment_id}/attendance"),
            &admin,
        )
        .await;
    assert_eq!(attendance[0]["status"], "present");

    // Payments are admin-only.
    let payment = json!({
        "enrollment_id": enrollment_id,
        "amount_cents": 250_00,
        "paid_on": "2025-01-06",
        "method": "card",
    });
    let (status, _) = app.post("/api/v1/payments", &coach, payment.clone()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.post("/api/v1/payments", &admin, payment).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, payments) = app
        .get(&format!("/api/v1/enrollments/{enrollment_id}/payments"), &admin)
        .await;
    assert_eq!(payments[0]["amount_cents"], 25000);

    let (_, mine) = app
        .get(&format!("/api/v1/users/{student_id}/enrollments"), &admin)
        .await;
    assert_eq!(mine.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn nested_list_for_unknown_parent_is_empty() {
    let app = TestApp::spawn().await.unwrap();
    let (status, body) = app
        .get(
            &format!("/api/v1/venues/{}/batches", Uuid::new_v4()),
            &app.admin_token(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn batch_under_unknown_venue_is_rejected_by_foreign_key() {
    let app = TestApp::spawn().await.unwrap();
    let (status, body) = app
        .post(
            &format!("/api/v1/venues/{}/batches", Uuid::new_v4()),
            &app.admin_token(),
            json!({ "name": "Ghost", "start_date": "2025-01-01", "end_date": "2025-02-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["details"]["repository_error"].is_string());
}

#[tokio::test]
async fn plan_offer_attach_and_detach_are_idempotent() {
    let app = TestApp::spawn().await.unwrap();
    let admin = app.admin_token();

    let (_, plan) = app
        .post(
            "/api/v1/plans",
            &admin,
            json!({ "name": "Quarterly", "price_cents": 9000, "duration_days": 90 }),
        )
        .await;
    let plan_id = id_of(&plan);
    let (_, offer) = app
        .post(
            "/api/v1/offers",
            &admin,
            json!({ "discount_pct": 10.0, "valid_from": "2025-01-01", "valid_to": "2025-06-30" }),
        )
        .await;
    let offer_id = id_of(&offer);
    let link = format!("/api/v1/plans/{plan_id}/offers/{offer_id}");

    for _ in 0..2 {
        let (status, _) = app.send(Method::PUT, &link, Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
    let (_, plan) = app.get(&format!("/api/v1/plans/{plan_id}"), &admin).await;
    assert_eq!(plan["offers"].as_array().unwrap().len(), 1);

    let (_, offer) = app.get(&format!("/api/v1/offers/{offer_id}"), &admin).await;
    assert_eq!(offer["plans"][0]["id"], plan_id.to_string());

    for _ in 0..2 {
        let (status, _) = app.delete(&link, &admin).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
    let (_, plan) = app.get(&format!("/api/v1/plans/{plan_id}"), &admin).await;
    assert_eq!(plan["offers"], json!([]));

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/v1/plans/{plan_id}/offers/{}", Uuid::new_v4()),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn investment_transactions_are_scoped_to_their_investment() {
    let app = TestApp::spawn().await.unwrap();
    let investor = app.token(&["investor"]);
    let investor_id = app.create_user("backer@example.com", &["investor"]).await;
    let venue_id = create_venue(&app, "Stadium").await;

    let new_investment = json!({
        "venue_id": venue_id,
        "investor_id": investor_id,
        "units": 10,
        "avg_price_cents": 1500,
    });
    let (status, first) = app
        .post("/api/v1/investments", &investor, new_investment.clone())
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, second) = app
        .post("/api/v1/investments", &investor, new_investment)
        .await;
    let first_id = id_of(&first);
    let second_id = id_of(&second);

    let (status, txn) = app
        .post(
            &format!("/api/v1/investments/{first_id}/transactions"),
            &investor,
            json!({ "type": "buy", "units": 4, "price_cents": 1600, "transaction_ref": "TX-1" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{txn}");
    assert_eq!(txn["type"], "buy");
    assert!(txn["txn_date"].is_string());
    let txn_id = id_of(&txn);

    let (status, _) = app
        .get(
            &format!("/api/v1/investments/{first_id}/transactions/{txn_id}"),
            &investor,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .get(
            &format!("/api/v1/investments/{second_id}/transactions/{txn_id}"),
            &investor,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(
            &format!("/api/v1/investments/{first_id}/transactions"),
            &investor,
            json!({ "type": "sell", "units": 0, "price_cents": 1600 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listed) = app
        .get(
            &format!("/api/v1/investments/{first_id}/transactions"),
            &investor,
        )
        .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (_, mine) = app
        .get(&format!("/api/v1/users/{investor_id}/investments"), &investor)
        .await;
    assert_eq!(mine.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn login_issues_token_carrying_user_roles() {
    let app = TestApp::spawn().await.unwrap();
    app.create_user("Coach.Two@Example.com", &["coach"]).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "coach.two@example.com", "password": "correct-horse" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 3600);

    let token = body["access_token"].as_str().unwrap().to_string();
    let claims = app.state.jwt.verify(&token).unwrap();
    assert_eq!(claims.roles, vec!["coach".to_string()]);

    let (status, _) = app.get("/api/v1/courses", &token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "coach.two@example.com", "password": "wrong-horse" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn user_update_replaces_roles_and_keeps_password() {
    let app = TestApp::spawn().await.unwrap();
    let admin = app.admin_token();
    let user_id = app.create_user("multi@example.com", &["student", "coach"]).await;

    let (_, user) = app.get(&format!("/api/v1/users/{user_id}"), &admin).await;
    assert_eq!(user["roles"].as_array().unwrap().len(), 2);
    assert!(user.get("password_hash").is_none());

    let investor_role = app.role_id("investor").await;
    let (status, user) = app
        .put(
            &format!("/api/v1/users/{user_id}"),
            &admin,
            json!({
                "first_name": "Test",
                "last_name": "User",
                "email": "multi@example.com",
                "role_ids": [investor_role],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let roles = user["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0]["name"], "investor");

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "multi@example.com", "password": "correct-horse" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn repeated_transaction_update_keeps_date_and_timestamp() {
    let app = TestApp::spawn().await.unwrap();
    let investor = app.token(&["investor"]);
    let investor_id = app.create_user("steady@example.com", &["investor"]).await;
    let venue_id = create_venue(&app, "Annex").await;

    let (_, investment) = app
        .post(
            "/api/v1/investments",
            &investor,
            json!({
                "venue_id": venue_id,
                "investor_id": investor_id,
                "units": 3,
                "avg_price_cents": 700,
            }),
        )
        .await;
    let investment_id = id_of(&investment);

    let (status, txn) = app
        .post(
            &format!("/api/v1/investments/{investment_id}/transactions"),
            &investor,
            json!({ "type": "buy", "units": 4, "price_cents": 5, "transaction_ref": "r" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{txn}");
    let uri = format!("/api/v1/investments/{investment_id}/transactions/{}", id_of(&txn));
    let (_, stored) = app.get(&uri, &investor).await;

    let update = json!({ "type": "buy", "units": 2, "price_cents": 5, "transaction_ref": "r" });
    let (status, first) = app.put(&uri, &investor, update.clone()).await;
    assert_eq!(status, StatusCode::OK, "{first}");
    assert_eq!(first["units"], 2);
    assert_eq!(first["txn_date"], stored["txn_date"]);

    let (status, second) = app.put(&uri, &investor, update).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);

    // An explicit date still moves it.
    let (_, moved) = app
        .put(
            &uri,
            &investor,
            json!({
                "type": "buy",
                "units": 2,
                "price_cents": 5,
                "transaction_ref": "r",
                "txn_date": "2025-03-01T09:30:00+00:00",
            }),
        )
        .await;
    assert_eq!(moved["txn_date"], "2025-03-01T09:30:00+00:00");
}

#[tokio::test]
async fn repeated_user_update_with_same_password_changes_nothing() {
    let app = TestApp::spawn().await.unwrap();
    let admin = app.admin_token();
    let user_id = app.create_user("same@example.com", &["student"]).await;
    let uri = format!("/api/v1/users/{user_id}");
    let (_, created) = app.get(&uri, &admin).await;

    let body = json!({
        "first_name": "Test",
        "last_name": "User",
        "email": "same@example.com",
        "password": "correct-horse",
        "role_ids": [app.role_id("student").await],
    });
    let (status, first) = app.put(&uri, &admin, body.clone()).await;
    assert_eq!(status, StatusCode::OK, "{first}");
    let (_, second) = app.put(&uri, &admin, body).await;

    assert_eq!(first["updated_at"], created["updated_at"]);
    assert_eq!(second, first);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "same@example.com", "password": "correct-horse" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

/// One resource's create, read, update and delete round.
struct Lifecycle {
    create_uri: String,
    item_uri: String,
    create: Value,
    update: Value,
}

impl Lifecycle {
    fn flat(collection: &str, create: Value, update: Value) -> Self {
        Self {
            create_uri: format!("/api/v1/{collection}"),
            item_uri: format!("/api/v1/{collection}"),
            create,
            update,
        }
    }
}

/// Fields echoed back by the API; write-only inputs are skipped.
fn assert_echoes(body: &Value, input: &Value, context: &str) {
    for (key, expected) in input.as_object().unwrap() {
        if matches!(key.as_str(), "password" | "role_ids") {
            continue;
        }
        assert_eq!(&body[key], expected, "{context}: field `{key}` in {body}");
    }
}

async fn run_lifecycle(app: &TestApp, token: &str, case: Lifecycle) {
    let (status, created) = app.post(&case.create_uri, token, case.create.clone()).await;
    assert_eq!(status, StatusCode::CREATED, "create {}: {created}", case.create_uri);
    assert_echoes(&created, &case.create, "create");

    let item = format!("{}/{}", case.item_uri, id_of(&created));
    let (status, fetched) = app.get(&item, token).await;
    assert_eq!(status, StatusCode::OK, "get {item}");
    assert_echoes(&fetched, &case.create, "get");

    let (status, updated) = app.put(&item, token, case.update.clone()).await;
    assert_eq!(status, StatusCode::OK, "update {item}: {updated}");
    assert_echoes(&updated, &case.update, "update");
    assert_eq!(updated["id"], created["id"]);

    let (_, refetched) = app.get(&item, token).await;
    assert_echoes(&refetched, &case.update, "get after update");

    let (status, _) = app.delete(&item, token).await;
    assert_eq!(status, StatusCode::NO_CONTENT, "delete {item}");
    let (status, _) = app.get(&item, token).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "get deleted {item}");
    let (status, _) = app.delete(&item, token).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "delete twice {item}");
}

#[tokio::test]
async fn every_resource_supports_the_full_crud_lifecycle() {
    let app = TestApp::spawn().await.unwrap();
    let admin = app.admin_token();

    let venue_id = create_venue(&app, "Hub").await;
    let batch_id = create_batch(&app, venue_id).await;
    let coach_id = app.create_user("mentor@example.com", &["coach"]).await;
    let student_id = app.create_user("learner@example.com", &["student"]).await;
    let enrollment_id = create_enrollment(&app, student_id, batch_id).await;

    let (_, course) = app
        .post(
            "/api/v1/courses",
            &admin,
            json!({ "coach_id": coach_id, "title": "Footwork" }),
        )
        .await;
    let course_id = id_of(&course);

    let (_, investment) = app
        .post(
            "/api/v1/investments",
            &admin,
            json!({
                "venue_id": venue_id,
                "investor_id": coach_id,
                "units": 1,
                "avg_price_cents": 100,
            }),
        )
        .await;
    let investment_id = id_of(&investment);
    let student_role = app.role_id("student").await;

    let cases = vec![
        Lifecycle::flat(
            "expenses",
            json!({ "description": "Nets", "amount_cents": 4200, "incurred_on": "2025-02-01" }),
            json!({ "description": "Nets and cones", "amount_cents": 5100, "incurred_on": "2025-02-03" }),
        ),
        Lifecycle::flat("roles", json!({ "name": "groundstaff" }), json!({ "name": "caretaker" })),
        Lifecycle::flat(
            "offers",
            json!({ "discount_pct": 12.5, "valid_from": "2025-01-01", "valid_to": "2025-03-31" }),
            json!({ "discount_pct": 20.5, "valid_from": "2025-02-01", "valid_to": "2025-04-30" }),
        ),
        Lifecycle::flat(
            "plans",
            json!({ "name": "Monthly", "description": "", "price_cents": 3000, "duration_days": 30 }),
            json!({ "name": "Monthly Plus", "description": "Kit included", "price_cents": 3500, "duration_days": 30 }),
        ),
        Lifecycle::flat(
            "courses",
            json!({ "coach_id": coach_id, "title": "Batting", "description": "Basics", "content_url": "" }),
            json!({ "coach_id": coach_id, "title": "Batting II", "description": "Drills", "content_url": "https://videos.example.com/b2" }),
        ),
        Lifecycle::flat(
            "assessments",
            json!({ "course_id": course_id, "student_id": student_id, "score": 61.5, "attempted_at": "2025-02-10T10:00:00+00:00" }),
            json!({ "course_id": course_id, "student_id": student_id, "score": 78.5, "attempted_at": "2025-02-17T10:00:00+00:00" }),
        ),
        Lifecycle::flat(
            "payments",
            json!({ "enrollment_id": enrollment_id, "amount_cents": 1500, "paid_on": "2025-01-10", "method": "cash", "transaction_ref": "" }),
            json!({ "enrollment_id": enrollment_id, "amount_cents": 1800, "paid_on": "2025-01-11", "method": "upi", "transaction_ref": "UPI-77" }),
        ),
        Lifecycle::flat(
            "attendance",
            json!({ "enrollment_id": enrollment_id, "date": "2025-01-08", "status": "present" }),
            json!({ "enrollment_id": enrollment_id, "date": "2025-01-08", "status": "absent" }),
        ),
        Lifecycle::flat(
            "investments",
            json!({ "venue_id": venue_id, "investor_id": coach_id, "units": 5, "avg_price_cents": 900 }),
            json!({ "venue_id": venue_id, "investor_id": coach_id, "units": 8, "avg_price_cents": 950 }),
        ),
        Lifecycle::flat(
            "enrollments",
            json!({ "student_id": student_id, "batch_id": batch_id, "enrolled_on": "2025-01-20", "status": "active" }),
            json!({ "student_id": student_id, "batch_id": batch_id, "enrolled_on": "2025-01-20", "status": "completed" }),
        ),
        Lifecycle::flat(
            "users",
            json!({ "first_name": "Asha", "last_name": "Rao", "email": "asha@example.com", "password": "long-enough", "role_ids": [student_role] }),
            json!({ "first_name": "Asha", "last_name": "Menon", "email": "asha.menon@example.com", "role_ids": [] }),
        ),
        Lifecycle {
            create_uri: format!("/api/v1/venues/{venue_id}/batches"),
            item_uri: "/api/v1/batches".to_string(),
            create: json!({ "name": "Evening", "start_date": "2025-04-01", "end_date": "2025-06-30" }),
            update: json!({ "venue_id": venue_id, "name": "Late Evening", "start_date": "2025-04-01", "end_date": "2025-07-15" }),
        },
        Lifecycle {
            create_uri: format!("/api/v1/investments/{investment_id}/transactions"),
            item_uri: format!("/api/v1/investments/{investment_id}/transactions"),
            create: json!({ "type": "buy", "units": 3, "price_cents": 110, "transaction_ref": "B-1", "txn_date": "2025-01-15T08:00:00+00:00" }),
            update: json!({ "type": "sell", "units": 1, "price_cents": 130, "transaction_ref": "S-1", "txn_date": "2025-02-15T08:00:00+00:00" }),
        },
    ];

    for case in cases {
        run_lifecycle(&app, &admin, case).await;
    }
}

#[tokio::test]
async fn deleting_a_referenced_parent_is_rejected_by_foreign_key() {
    let app = TestApp::spawn().await.unwrap();
    let admin = app.admin_token();

    let venue_id = create_venue(&app, "Held").await;
    create_batch(&app, venue_id).await;

    let venue_uri = format!("/api/v1/venues/{venue_id}");
    let (status, body) = app.delete(&venue_uri, &admin).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{body}");
    assert!(body["details"]["repository_error"].is_string());
    let (status, _) = app.get(&venue_uri, &admin).await;
    assert_eq!(status, StatusCode::OK);

    let coach_id = app.create_user("owner@example.com", &["coach"]).await;
    let student_id = app.create_user("taker@example.com", &["student"]).await;
    let (_, course) = app
        .post(
            "/api/v1/courses",
            &admin,
            json!({ "coach_id": coach_id, "title": "Bowling" }),
        )
        .await;
    let course_id = id_of(&course);
    let (status, _) = app
        .post(
            "/api/v1/assessments",
            &admin,
            json!({
                "course_id": course_id,
                "student_id": student_id,
                "score": 55.0,
                "attempted_at": "2025-03-01T12:00:00+00:00",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .delete(&format!("/api/v1/courses/{course_id}"), &admin)
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{body}");
    assert!(body["details"]["repository_error"].is_string());
}
