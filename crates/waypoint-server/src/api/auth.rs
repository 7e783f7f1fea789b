//! Signup and login endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

async fn signup(
    State(state): State<Arc<AppState>>,
    Json(body): Json<schemas::SignupRequest>,
) -> ApiResult<(StatusCode, Json<schemas::AuthResponse>)> {
    let out = state
        .auth
        .signup(waypoint_auth::service::SignupInput {
            email: body.email,
            name: body.name,
            password: body.password,
            age: body.age,
            education_level: body.education_level,
            city: body.city,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(out.into())))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<schemas::LoginRequest>,
) -> ApiResult<Json<schemas::AuthResponse>> {
    let out = state
        .auth
        .login(waypoint_auth::service::LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(out.into()))
}

pub mod schemas {
    use serde::{Deserialize, Serialize};
    use waypoint_auth::service::AuthOutput;
    use waypoint_core::models::user::User;

    #[derive(Debug, Deserialize)]
    pub struct SignupRequest {
        pub email: String,
        pub name: String,
        pub password: String,
        pub age: Option<u32>,
        pub education_level: Option<String>,
        pub city: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct LoginRequest {
        pub email: String,
        pub password: String,
    }

    #[derive(Debug, Serialize)]
    pub struct AuthResponse {
        pub token: String,
        pub user: User,
        pub expires_in: u64,
    }

    impl From<AuthOutput> for AuthResponse {
        fn from(out: AuthOutput) -> Self {
            Self {
                token: out.token,
                user: out.user,
                expires_in: out.expires_in,
            }
        }
    }
}
