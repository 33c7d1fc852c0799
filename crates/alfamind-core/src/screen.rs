//! Screen identifiers and the navigation transition table.

use std::fmt;

/// Identifies the single active top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Splash,
    Login,
    Signup,
    Home,
}

impl Screen {
    /// All screens, in first-appearance order.
    pub const ALL: [Screen; 4] = [Self::Splash, Self::Login, Self::Signup, Self::Home];

    /// Short label for logs and titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Splash => "Splash",
            Self::Login => "Login",
            Self::Signup => "Signup",
            Self::Home => "Home",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named triggers for screen transitions.
///
/// One timer event plus four user actions. Routing is a total function:
/// any (screen, event) pair outside the table below is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavEvent {
    /// One-shot splash timer elapsed.
    SplashTimedOut,
    /// Login form submitted (always accepted, no credential checks).
    LoginSucceeded,
    /// "Belum punya akun?" link on the login screen.
    SignupRequested,
    /// Signup form submitted (always accepted).
    SignupSucceeded,
    /// "Sudah punya akun?" link on the signup screen.
    BackToLogin,
}

impl NavEvent {
    /// All events, for exhaustive iteration.
    pub const ALL: [NavEvent; 5] = [
        Self::SplashTimedOut,
        Self::LoginSucceeded,
        Self::SignupRequested,
        Self::SignupSucceeded,
        Self::BackToLogin,
    ];

    /// Short label for logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::SplashTimedOut => "splash timeout",
            Self::LoginSucceeded => "login success",
            Self::SignupRequested => "signup requested",
            Self::SignupSucceeded => "signup success",
            Self::BackToLogin => "back to login",
        }
    }
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The navigation table. Returns the target screen for a legal
/// (current, event) pair, `None` for everything else.
///
/// | From   | Event            | To     |
/// |--------|------------------|--------|
/// | Splash | splash timeout   | Login  |
/// | Login  | login success    | Home   |
/// | Login  | signup requested | Signup |
/// | Signup | signup success   | Home   |
/// | Signup | back to login    | Login  |
///
/// Home has no outgoing edges.
pub fn transition(current: Screen, event: NavEvent) -> Option<Screen> {
    match (current, event) {
        (Screen::Splash, NavEvent::SplashTimedOut) => Some(Screen::Login),
        (Screen::Login, NavEvent::LoginSucceeded) => Some(Screen::Home),
        (Screen::Login, NavEvent::SignupRequested) => Some(Screen::Signup),
        (Screen::Signup, NavEvent::SignupSucceeded) => Some(Screen::Home),
        (Screen::Signup, NavEvent::BackToLogin) => Some(Screen::Login),
        _ => None,
    }
}
