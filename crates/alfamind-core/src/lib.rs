//! Navigation state machine and storefront domain for the Alfamind TUI.
//!
//! This crate owns everything below the rendering layer:
//!
//! - **[`ScreenRouter`]** — Single owner of the active [`Screen`], driving
//!   the fixed Splash → Login → Signup/Home navigation table. Arms a
//!   cancellable one-shot splash timer on [`start()`](ScreenRouter::start)
//!   and publishes changes over a `tokio::sync::watch` channel.
//!
//! - **[`AuthGateway`]** — The authentication seam behind the login and
//!   signup forms. [`StubAuth`] accepts everything; nothing here talks to
//!   a network.
//!
//! - **Catalog** ([`catalog`]) — The compiled-in product list and store
//!   branding shown on the Home screen.

pub mod auth;
pub mod catalog;
pub mod router;
pub mod screen;

// ── Primary re-exports ──────────────────────────────────────────────
pub use auth::{AuthError, AuthGateway, Credentials, Session, SignupRequest, StubAuth};
pub use catalog::{ImageRef, PRODUCTS, Product, StoreProfile};
pub use router::{SPLASH_DURATION, ScreenRouter};
pub use screen::{NavEvent, Screen, transition};
