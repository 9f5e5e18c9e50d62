//! Handlers for the `/auth` resource (signup, login, profile).

use axum::extract::State;
use axum::Json;
use payroll_core::error::CoreError;
use payroll_db::models::user::{CreateUser, User, UserResponse};
use sqlx::PgPool;
use payroll_db::repositories::user_repo::USERNAME_CONSTRAINT;
use payroll_db::repositories::{is_unique_violation, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ValidatedJson;
use crate::state::AppState;

/// Message shared by both login failure paths so callers cannot tell an
/// unknown username from a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Message returned when signing up with a taken username.
const USERNAME_TAKEN: &str = "Username already exists";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup` and `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    #[validate(length(min = 6, max = 72))]
    pub password: String,
}

/// Response body for a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub user: UserResponse,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/signup
///
/// Register a new user. Rejects a taken username with 400.
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<Credentials>,
) -> AppResult<Json<SignupResponse>> {
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest(USERNAME_TAKEN.into()));
    }

    let hashed_password = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: input.username,
        hashed_password,
    };

    let user = insert_user(&state.pool, &create).await?;

    tracing::info!(user_id = user.id, username = %user.username, "User signed up");

    Ok(Json(SignupResponse {
        message: "Signup successful!",
        user: UserResponse::from(&user),
    }))
}

/// Insert a new user row.
///
/// A concurrent signup can win the race between the username lookup and
/// this insert. The unique constraint catches it and the loser gets the same
/// 400 as the up-front check.
pub async fn insert_user(pool: &PgPool, create: &CreateUser) -> AppResult<User> {
    UserRepo::create(pool, create).await.map_err(|e| {
        if is_unique_violation(&e, USERNAME_CONSTRAINT) {
            AppError::BadRequest(USERNAME_TAKEN.into())
        } else {
            AppError::Database(e)
        }
    })
}

/// POST /auth/login
///
/// Authenticate with username + password and return a bearer token.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<Credentials>,
) -> AppResult<Json<TokenResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(&input.password, &user.hashed_password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let access_token = generate_access_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

/// GET /auth/profile
///
/// Return the public view of the authenticated user. 404 if the user no
/// longer exists.
pub async fn profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    Ok(Json(UserResponse::from(&user)))
}
