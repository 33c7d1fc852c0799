//! Authentication boundary.
//!
//! There is no real backend: submits always succeed. The seam still
//! exists as a named trait so the view layer calls an explicit gateway
//! instead of baking "always logged in" into the router, and so a real
//! implementation can slot in later without touching navigation.

use secrecy::SecretString;
use thiserror::Error;
use tracing::debug;

// ── Errors ───────────────────────────────────────────────────────

/// Failures a gateway implementation may report. [`StubAuth`] never does.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authentication rejected: {message}")]
    Rejected { message: String },

    #[error("Authentication backend unavailable: {reason}")]
    Unavailable { reason: String },
}

// ── Requests / responses ─────────────────────────────────────────

/// Login form contents. The password stays wrapped in a [`SecretString`]
/// from keypress to gateway, so `Debug` output and logs never leak it.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Signup form contents. The confirm field is a screen-local affair and
/// does not travel past the form.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

impl SignupRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Minimal proof of a completed login or signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

// ── Gateway trait ────────────────────────────────────────────────

/// The authentication seam between the forms and the router.
pub trait AuthGateway: Send + Sync {
    /// Exchange login credentials for a session.
    fn login(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// Register a new account and log it in.
    fn register(&self, request: &SignupRequest) -> Result<Session, AuthError>;
}

/// Gateway that accepts everything, including empty fields. Input
/// validation is deliberately absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAuth;

impl AuthGateway for StubAuth {
    fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        debug!(email = %credentials.email, "stub gateway accepted login");
        Ok(Session {
            email: credentials.email.clone(),
        })
    }

    fn register(&self, request: &SignupRequest) -> Result<Session, AuthError> {
        debug!(username = %request.username, email = %request.email, "stub gateway accepted signup");
        Ok(Session {
            email: request.email.clone(),
        })
    }
}
