//! All possible UI actions. Actions are the sole mechanism for state mutation.

use alfamind_core::{Credentials, Screen, SignupRequest};

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    /// The router moved; swap the visible screen.
    ScreenChanged(Screen),
    /// "Belum punya akun?" link on the login screen.
    SignupRequested,
    /// Esc or the "Sudah punya akun?" link on the signup screen.
    BackToLogin,

    // ── Auth ──────────────────────────────────────────────────────
    /// Login form submitted with whatever is typed.
    SubmitLogin(Credentials),
    /// Signup form submitted with whatever is typed.
    SubmitSignup(SignupRequest),
}
