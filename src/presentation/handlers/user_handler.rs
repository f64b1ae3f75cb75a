use std::sync::Arc;

use crate::{
    domain::{
        models::{registration::RegistrationInput, user::User},
        repositories::{
            client_repository::ClientRepository, user_repository::UserRepository,
        },
        services::{clock::Clock, credit_service::CreditLimitProvider},
    },
    usecase::register_user_usecase::RegisterUserUsecase,
};
use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Request

/// json for register request
#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client_id: i32,
}

// Response

/// json for register response
#[derive(Serialize, Deserialize)]
pub struct RegisterResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub client_name: String,
    pub has_credit_limit: bool,
    pub credit_limit: Option<i64>,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            client_name: user.client().name().to_string(),
            has_credit_limit: user.has_credit_limit(),
            credit_limit: user.credit_limit(),
        }
    }
}

/* Router Function and Handler Function */

// User Router

/// function return Router object
/// Suppose to be nested by main router

pub fn create_user_router<
    C: ClientRepository + Send + Sync + 'static,
    P: CreditLimitProvider + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    K: Clock + Send + Sync + 'static,
>(
    register_service: RegisterUserUsecase<C, P, U, K>,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/register", post(register::<C, P, U, K>))
        .with_state(state)
}

pub struct AppState<C: ClientRepository, P: CreditLimitProvider, U: UserRepository, K: Clock> {
    pub register_service: Arc<RegisterUserUsecase<C, P, U, K>>,
}

impl<C: ClientRepository, P: CreditLimitProvider, U: UserRepository, K: Clock> Clone
    for AppState<C, P, U, K>
{
    fn clone(&self) -> Self {
        Self {
            register_service: self.register_service.clone(),
        }
    }
}

// handler function

/// handler function for register
async fn register<
    C: ClientRepository + Send + Sync,
    P: CreditLimitProvider + Send + Sync,
    U: UserRepository + Send + Sync,
    K: Clock + Send + Sync,
>(
    State(state): State<AppState<C, P, U, K>>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let input = RegistrationInput {
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        date_of_birth: payload.date_of_birth,
        client_id: payload.client_id,
    };

    match state.register_service.try_register(input).await {
        Ok(user) => {
            let response = RegisterResponse::from(user);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) if e.is_rejection() => {
            (StatusCode::BAD_REQUEST, Json("Registration rejected")).into_response()
        }
        Err(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json("Registration failed")).into_response()
        }
    }
}
