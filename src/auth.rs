//! # Authentication and Authorization
//!
//! Bearer-token authentication (HS256 JWT) and role allow-lists for the
//! protected API routes.
//!
//! Authentication runs once per request in [`auth_middleware`], which verifies
//! the token and stores an [`AuthContext`] in the request extensions.
//! Authorization is layered per route with [`require_any_role`].

use std::{str::FromStr, sync::Arc};

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::{Error as JwtError, ErrorKind},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::{ApiError, forbidden, unauthorized};
use crate::server::AppState;

/// Role names the authorization gate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Coach,
    Student,
    Investor,
}

impl RoleName {
    pub const ALL: [RoleName; 4] = [
        RoleName::Admin,
        RoleName::Coach,
        RoleName::Student,
        RoleName::Investor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "admin",
            RoleName::Coach => "coach",
            RoleName::Student => "student",
            RoleName::Investor => "investor",
        }
    }
}

impl FromStr for RoleName {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(RoleName::Admin),
            "coach" => Ok(RoleName::Coach),
            "student" => Ok(RoleName::Student),
            "investor" => Ok(RoleName::Investor),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allow-list for administrative mutations.
pub const ADMIN: &[RoleName] = &[RoleName::Admin];
/// Allow-list for coaching mutations (enrollments, attendance, courses, assessments).
pub const ADMIN_OR_COACH: &[RoleName] = &[RoleName::Admin, RoleName::Coach];
/// Allow-list for investment mutations.
pub const ADMIN_OR_INVESTOR: &[RoleName] = &[RoleName::Admin, RoleName::Investor];

/// True when the caller holds at least one allowed role.
pub fn has_any(caller: &[RoleName], allowed: &[RoleName]) -> bool {
    caller.iter().any(|role| allowed.contains(role))
}

/// Claim set carried by a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// Verified caller identity attached to every authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    pub roles: Vec<RoleName>,
}

impl AuthContext {
    pub fn has_any(&self, allowed: &[RoleName]) -> bool {
        has_any(&self.roles, allowed)
    }
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        let mut roles: Vec<RoleName> = claims
            .roles
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect();
        roles.sort_unstable();
        roles.dedup();

        Self {
            user_id: claims.sub,
            email: claims.email,
            roles,
        }
    }
}

/// A freshly signed bearer token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: u64,
}

/// Signing and verification keys derived from the configured secret.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    issuer: Option<String>,
    ttl_seconds: u64,
}

impl JwtKeys {
    pub fn from_config(config: &AppConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        if let Some(issuer) = &config.jwt_issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            issuer: config.jwt_issuer.clone(),
            ttl_seconds: config.jwt_ttl_seconds,
        }
    }

    /// Signs a token for the given user valid for the configured TTL.
    pub fn issue(
        &self,
        user_id: Uuid,
        email: &str,
        roles: Vec<String>,
    ) -> Result<IssuedToken, JwtError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            roles,
            iat: now,
            exp: now + self.ttl_seconds as i64,
            iss: self.issuer.clone(),
        };

        Ok(IssuedToken {
            token: self.encode(&claims)?,
            expires_in: self.ttl_seconds,
        })
    }

    /// Signs an arbitrary claim set.
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }

    /// Verifies signature, expiry and (when configured) issuer.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}

impl FromRef<AppState> for Arc<JwtKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.jwt)
    }
}

/// Authentication middleware: rejects with 401 unless a valid bearer token is
/// present, then attaches the caller's [`AuthContext`].
pub async fn auth_middleware(
    State(keys): State<Arc<JwtKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?;

    let claims = keys.verify(token).map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => unauthorized(Some("Token has expired")),
        ErrorKind::InvalidIssuer => unauthorized(Some("Token issuer is not accepted")),
        _ => unauthorized(Some("Invalid bearer token")),
    })?;

    let context = AuthContext::from(claims);
    tracing::debug!(user_id = %context.user_id, roles = ?context.roles, "Authenticated request");

    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}

/// Authorization check for a route allow-list; must run behind [`auth_middleware`].
pub async fn require_any_role(
    allowed: &'static [RoleName],
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = request
        .extensions()
        .get::<AuthContext>()
        .ok_or_else(|| unauthorized(None))?;

    if !context.has_any(allowed) {
        tracing::info!(
            user_id = %context.user_id,
            roles = ?context.roles,
            allowed = ?allowed,
            "Rejected request lacking required role"
        );
        let names: Vec<&str> = allowed.iter().map(RoleName::as_str).collect();
        return Err(forbidden(Some(&format!(
            "Requires one of roles: {}",
            names.join(", ")
        ))));
    }

    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized(Some("Missing Authorization header")))?
        .to_str()
        .map_err(|_| unauthorized(Some("Invalid Authorization header")))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized(Some("Authorization header must use Bearer scheme")))?
        .trim();

    if token.is_empty() {
        return Err(unauthorized(Some("Empty bearer token")));
    }

    Ok(token)
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    fn test_keys() -> Arc<JwtKeys> {
        Arc::new(JwtKeys::from_config(&AppConfig {
            jwt_secret: "test-secret-test-secret-test-secret!".to_string(),
            ..Default::default()
        }))
    }

    fn token_for(keys: &JwtKeys, roles: &[&str]) -> String {
        keys.issue(
            Uuid::new_v4(),
            "user@example.com",
            roles.iter().map(|r| r.to_string()).collect(),
        )
        .unwrap()
        .token
    }

    async fn run(keys: Arc<JwtKeys>, request: Request<Body>) -> Response {
        async fn handler(ctx: AuthContext) -> String {
            ctx.email
        }

        Router::new()
            .route(
                "/admin",
                get(handler).route_layer(middleware::from_fn(|req: Request<Body>, next: Next| {
                    require_any_role(ADMIN, req, next)
                })),
            )
            .route("/any", get(handler))
            .route_layer(middleware::from_fn_with_state(keys, auth_middleware))
            .oneshot(request)
            .await
            .unwrap()
    }

    fn get_request(uri: &str, authorization: Option<String>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn has_any_requires_intersection() {
        assert!(has_any(&[RoleName::Coach], ADMIN_OR_COACH));
        assert!(has_any(&[RoleName::Student, RoleName::Admin], ADMIN));
        assert!(!has_any(&[RoleName::Student], ADMIN_OR_COACH));
        assert!(!has_any(&[], ADMIN));
        assert!(!has_any(&[RoleName::Admin], &[]));
    }

    #[test]
    fn unknown_role_names_are_ignored() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "a@example.com".to_string(),
            roles: vec!["Admin".to_string(), "superuser".to_string()],
            iat: 0,
            exp: 0,
            iss: None,
        };

        let context = AuthContext::from(claims);
        assert_eq!(context.roles, vec![RoleName::Admin]);
    }

    #[test]
    fn repeated_role_names_collapse_even_when_not_adjacent() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "a@example.com".to_string(),
            roles: ["admin", "coach", "admin", "investor", "coach"]
                .iter()
                .map(|r| r.to_string())
                .collect(),
            iat: 0,
            exp: 0,
            iss: None,
        };

        let context = AuthContext::from(claims);
        assert_eq!(
            context.roles,
            vec![RoleName::Admin, RoleName::Coach, RoleName::Investor]
        );
    }

    #[test]
    fn issued_token_verifies() {
        let keys = test_keys();
        let user_id = Uuid::new_v4();
        let issued = keys
            .issue(user_id, "coach@example.com", vec!["coach".to_string()])
            .unwrap();

        let claims = keys.verify(&issued.token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.roles, vec!["coach".to_string()]);
        assert_eq!(issued.expires_in, 3600);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = JwtKeys::from_config(&AppConfig {
            jwt_secret: "another-secret-another-secret-1234".to_string(),
            ..Default::default()
        });
        let token = token_for(&other, &["admin"]);

        assert!(test_keys().verify(&token).is_err());
    }

    #[test]
    fn issuer_is_checked_when_configured() {
        let config = AppConfig {
            jwt_secret: "test-secret-test-secret-test-secret!".to_string(),
            jwt_issuer: Some("spodemy".to_string()),
            ..Default::default()
        };
        let with_issuer = JwtKeys::from_config(&config);
        let without_issuer = test_keys();

        let token = token_for(&without_issuer, &["admin"]);
        let err = with_issuer.verify(&token).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidIssuer | ErrorKind::MissingRequiredClaim(_)
        ));

        let token = token_for(&with_issuer, &["admin"]);
        assert!(with_issuer.verify(&token).is_ok());
    }

    #[tokio::test]
    async fn missing_auth_header_returns_401() {
        let response = run(test_keys(), get_request("/any", None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn invalid_auth_scheme_returns_401() {
        let response = run(
            test_keys(),
            get_request("/any", Some("Basic dGVzdDoxMjM=".to_string())),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn garbage_token_returns_401() {
        let response = run(
            test_keys(),
            get_request("/any", Some("Bearer not-a-jwt".to_string())),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn expired_token_returns_401_even_for_admin() {
        let keys = test_keys();
        let now = Utc::now().timestamp();
        let token = keys
            .encode(&Claims {
                sub: Uuid::new_v4(),
                email: "admin@example.com".to_string(),
                roles: vec!["admin".to_string()],
                iat: now - 7200,
                exp: now - 3600,
                iss: None,
            })
            .unwrap();

        let response = run(keys, get_request("/admin", Some(format!("Bearer {token}")))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_passes_through() {
        let keys = test_keys();
        let token = token_for(&keys, &["student"]);

        let response = run(keys, get_request("/any", Some(format!("Bearer {token}")))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_role_returns_403() {
        let keys = test_keys();
        let token = token_for(&keys, &["student", "coach"]);

        let response = run(keys, get_request("/admin", Some(format!("Bearer {token}")))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn allowed_role_reaches_handler() {
        let keys = test_keys();
        let token = token_for(&keys, &["admin"]);

        let response = run(keys, get_request("/admin", Some(format!("Bearer {token}")))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
