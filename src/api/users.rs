//! User account API endpoints
//!
//! Registration, login, and the authenticated profile operations. Response
//! shapes are built here from domain getters; the entity itself never
//! serializes, so tokens and password hashes cannot leak through this layer.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::{extract_session_token, SessionToken};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::account::{Account, AccountId, AccountStatus, ProfileView, PublicProfile};
use crate::infrastructure::session::ProfileChanges;

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users", get(users_index))
        .route("/users/{id}", get(get_user).put(update_user))
        .route("/users/{id}/logout", put(logout))
}

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: the issued token plus the account's own view
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub account: AccountResponse,
}

/// Full account view, shown only to the account's owner
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
    pub status: AccountStatus,
    pub created_at: String,
    pub birthdate: Option<String>,
}

impl AccountResponse {
    fn from_account(account: &Account) -> Self {
        Self {
            id: account.id().value(),
            username: account.username().to_string(),
            status: account.status(),
            created_at: account.created_at().to_rfc3339(),
            birthdate: account.birthdate().map(|d| d.to_string()),
        }
    }
}

/// Restricted view shown when reading someone else's profile
#[derive(Debug, Serialize)]
pub struct PublicAccountResponse {
    pub id: i64,
    pub username: String,
    pub status: AccountStatus,
    pub birthdate: Option<String>,
}

impl PublicAccountResponse {
    fn from_profile(profile: &PublicProfile) -> Self {
        Self {
            id: profile.id.value(),
            username: profile.username.clone(),
            status: profile.status,
            birthdate: profile.birthdate.map(|d| d.to_string()),
        }
    }
}

/// Own-or-restricted response for a single profile read
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Own(AccountResponse),
    Public(PublicAccountResponse),
}

impl From<ProfileView> for ProfileResponse {
    fn from(view: ProfileView) -> Self {
        match view {
            ProfileView::Own(account) => Self::Own(AccountResponse::from_account(&account)),
            ProfileView::Public(profile) => {
                Self::Public(PublicAccountResponse::from_profile(&profile))
            }
        }
    }
}

/// Query parameters for the dual-purpose /users collection endpoint
#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Query parameter identifying the caller on a single profile read
#[derive(Debug, Deserialize)]
pub struct GetUserQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

/// Profile update request. Unknown keys are ignored; absent fields are
/// left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub birthdate: Option<String>,
}

/// POST /register
///
/// Creates an account and returns its own view. The stored session token is
/// deliberately not included; clients log in to obtain one.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    debug!(username = %request.username, "Registering account");

    let account = state
        .account_service
        .register(&request.username, &request.password)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse::from_account(&account)),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    debug!(username = %request.username, "Login attempt");

    let (token, account) = state
        .account_service
        .login(&request.username, &request.password)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(LoginResponse {
        token,
        account: AccountResponse::from_account(&account),
    }))
}

/// GET /users
///
/// Two mutually exclusive modes: `username` and `password` query parameters
/// create an account, while `userId` plus an Authorization header lists all
/// accounts. Mixing the modes, or supplying neither completely, is a bad
/// request.
pub async fn users_index(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let wants_create = query.username.is_some() || query.password.is_some();
    let wants_list = query.user_id.is_some();

    if wants_create && wants_list {
        return Err(ApiError::bad_request(
            "Provide either username/password (create) or userId (list), not both",
        ));
    }

    if wants_create {
        let (Some(username), Some(password)) =
            (query.username.as_deref(), query.password.as_deref())
        else {
            return Err(ApiError::bad_request(
                "Account creation requires both username and password",
            ));
        };

        debug!(username = %username, "Creating account via query parameters");

        let account = state
            .account_service
            .register(username, password)
            .await
            .map_err(ApiError::from)?;

        return Ok((
            StatusCode::CREATED,
            Json(AccountResponse::from_account(&account)),
        )
            .into_response());
    }

    if let Some(user_id) = query.user_id {
        let token = extract_session_token(&headers)?;

        debug!(caller = user_id, "Listing accounts");

        let profiles = state
            .account_service
            .list_accounts(AccountId::new(user_id), &token)
            .await
            .map_err(ApiError::from)?;

        let responses: Vec<PublicAccountResponse> = profiles
            .iter()
            .map(PublicAccountResponse::from_profile)
            .collect();

        return Ok(Json(responses).into_response());
    }

    Err(ApiError::bad_request(
        "Provide either username/password (create) or userId (list)",
    ))
}

/// GET /users/{id}
///
/// The caller identifies itself with the `userId` query parameter and its
/// session token; the service decides between the own and restricted view.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<GetUserQuery>,
    SessionToken(token): SessionToken,
) -> Result<Json<ProfileResponse>, ApiError> {
    let caller = query
        .user_id
        .ok_or_else(|| ApiError::bad_request("Missing userId query parameter"))?;

    debug!(caller, target = id, "Reading profile");

    let view = state
        .account_service
        .get_account(AccountId::new(caller), AccountId::new(id), &token)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ProfileResponse::from(view)))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    SessionToken(token): SessionToken,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<StatusCode, ApiError> {
    debug!(id, "Updating profile");

    let changes = ProfileChanges {
        username: request.username,
        birthdate: request.birthdate,
    };

    state
        .account_service
        .update_profile(AccountId::new(id), &token, changes)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /users/{id}/logout
pub async fn logout(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    SessionToken(token): SessionToken,
) -> Result<StatusCode, ApiError> {
    debug!(id, "Logging out");

    state
        .account_service
        .logout(AccountId::new(id), &token)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_account() -> Account {
        Account::restore(
            AccountId::new(1),
            "alice",
            "argon2-hash",
            Some("secret-token".to_string()),
            AccountStatus::Online,
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            NaiveDate::from_ymd_opt(1990, 5, 17),
        )
    }

    #[test]
    fn test_account_response_excludes_credentials() {
        let response = AccountResponse::from_account(&sample_account());
        let json = serde_json::to_value(&response).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("token"));
        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("password_hash"));
        assert_eq!(obj["id"], 1);
        assert_eq!(obj["username"], "alice");
        assert_eq!(obj["status"], "ONLINE");
        assert_eq!(obj["birthdate"], "1990-05-17");
    }

    #[test]
    fn test_public_account_response_fields() {
        let profile = PublicProfile::from_account(&sample_account());
        let response = PublicAccountResponse::from_profile(&profile);
        let json = serde_json::to_value(&response).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["birthdate", "id", "status", "username"]);
    }

    #[test]
    fn test_profile_response_views_differ() {
        let account = sample_account();

        let own = ProfileResponse::from(ProfileView::Own(account.clone()));
        let own_json = serde_json::to_value(&own).unwrap();
        assert!(own_json.as_object().unwrap().contains_key("created_at"));

        let public =
            ProfileResponse::from(ProfileView::Public(PublicProfile::from_account(&account)));
        let public_json = serde_json::to_value(&public).unwrap();
        assert!(!public_json.as_object().unwrap().contains_key("created_at"));
    }

    #[test]
    fn test_login_response_carries_token_at_top_level() {
        let response = LoginResponse {
            token: "issued-token".to_string(),
            account: AccountResponse::from_account(&sample_account()),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token"], "issued-token");
        assert!(json["account"].as_object().unwrap().contains_key("username"));
        assert!(!json["account"].as_object().unwrap().contains_key("token"));
    }

    #[test]
    fn test_users_query_user_id_is_camel_case() {
        let query: UsersQuery = serde_json::from_str(r#"{"userId": 7}"#).unwrap();
        assert_eq!(query.user_id, Some(7));
        assert!(query.username.is_none());
    }

    #[test]
    fn test_update_request_ignores_unknown_keys() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"username": "alice2", "nickname": "al"}"#).unwrap();

        assert_eq!(request.username.as_deref(), Some("alice2"));
        assert!(request.birthdate.is_none());
    }

    #[test]
    fn test_register_request_requires_both_fields() {
        let result: Result<RegisterRequest, _> =
            serde_json::from_str(r#"{"username": "alice"}"#);
        assert!(result.is_err());
    }
}
