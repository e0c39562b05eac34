use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::User;
use crate::validation::{check_email, require, FieldError, MIN_PASSWORD_LEN};

/// Username stamped on sessions issued from the login form; the signup form
/// uses the submitted username instead.
pub const LOGIN_USERNAME: &str = "Demo User";

#[derive(Deserialize, Clone, Debug)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SignUpPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct AuthResponse {
    pub success: bool,
    pub errors: Vec<FieldError>,
    pub user: Option<User>,
    pub redirect_to: Option<String>,
}

impl AuthResponse {
    pub fn rejected(errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            errors,
            user: None,
            redirect_to: None,
        }
    }

    pub fn accepted(user: User, redirect_to: &str) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            user: Some(user),
            redirect_to: Some(redirect_to.to_string()),
        }
    }
}

pub fn validate_login(payload: &LoginPayload) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_email("email", &payload.email, &mut errors);
    require("password", &payload.password, &mut errors);
    errors
}

pub fn validate_sign_up(payload: &SignUpPayload) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require("username", &payload.username, &mut errors);
    check_email("email", &payload.email, &mut errors);
    require("password", &payload.password, &mut errors);

    if !payload.password.trim().is_empty() && payload.password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 8 characters",
        ));
    }
    if payload.password != payload.password2 {
        errors.push(FieldError::new("password2", "Password fields didn't match."));
    }

    errors
}

/// Synthesize a local demo session: any validated submission is accepted and
/// gets an opaque locally generated token. A real implementation must verify
/// credentials against a trusted authority before issuing anything.
pub fn issue_session(username: &str, email: &str) -> (User, String) {
    let user = User {
        id: 1,
        username: username.to_string(),
        email: email.trim().to_string(),
    };
    let token = format!("demo-token-{}", Uuid::new_v4());
    (user, token)
}
