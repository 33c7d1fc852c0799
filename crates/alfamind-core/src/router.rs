//! Navigation state owner.
//!
//! [`ScreenRouter`] holds the active [`Screen`] behind a watch channel and
//! is its only writer. Every transition funnels through one guarded
//! compare-and-set, so a late timer callback or a double-tapped submit can
//! never push the UI into a screen the table does not allow. Views observe
//! changes via [`subscribe()`](ScreenRouter::subscribe) instead of sharing
//! mutable state.

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::screen::{NavEvent, Screen, transition};

/// Delay between mounting the router and the automatic move to Login.
pub const SPLASH_DURATION: Duration = Duration::from_millis(3000);

// ── ScreenRouter ─────────────────────────────────────────────────

/// Single owner of the current screen.
///
/// Cheaply cloneable via `Arc`. Create with [`new()`](Self::new), then
/// call [`start()`](Self::start) once the UI is mounted to arm the
/// one-shot splash timer.
#[derive(Clone)]
pub struct ScreenRouter {
    inner: Arc<RouterInner>,
}

struct RouterInner {
    current: watch::Sender<Screen>,
    cancel: CancellationToken,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl ScreenRouter {
    /// Create a router at [`Screen::Splash`]. Does NOT arm the splash
    /// timer; that happens in [`start()`](Self::start).
    pub fn new() -> Self {
        let (current, _) = watch::channel(Screen::Splash);
        Self {
            inner: Arc::new(RouterInner {
                current,
                cancel: CancellationToken::new(),
                timer: Mutex::new(None),
            }),
        }
    }

    /// The active screen right now.
    pub fn current(&self) -> Screen {
        *self.inner.current.borrow()
    }

    /// Subscribe to screen changes. Receivers are only woken when the
    /// screen actually changes; rejected events stay silent.
    pub fn subscribe(&self) -> watch::Receiver<Screen> {
        self.inner.current.subscribe()
    }

    // ── Splash timer lifecycle ───────────────────────────────────

    /// Arm the one-shot splash timer with the stock delay.
    pub async fn start(&self) {
        self.start_after(SPLASH_DURATION).await;
    }

    /// Arm the one-shot splash timer with a custom delay.
    ///
    /// The timer task holds only a weak reference: if every router handle
    /// is dropped before the delay elapses, the callback finds nothing to
    /// mutate and exits. Arming twice is ignored.
    pub async fn start_after(&self, delay: Duration) {
        let mut timer = self.inner.timer.lock().await;
        if timer.is_some() {
            debug!("splash timer already armed");
            return;
        }

        let weak = Arc::downgrade(&self.inner);
        let cancel = self.inner.cancel.clone();
        *timer = Some(tokio::spawn(splash_timer_task(weak, cancel, delay)));
        debug!(delay_ms = delay.as_millis(), "splash timer armed");
    }

    /// Tear the router down: cancel the pending splash timer (if any)
    /// and wait for its task to finish. After this, no further timer
    /// callback can run. Idempotent.
    pub async fn shutdown(&self) {
        self.inner.cancel.cancel();
        if let Some(handle) = self.inner.timer.lock().await.take() {
            let _ = handle.await;
        }
        debug!("router shut down");
    }

    // ── Transition operations ────────────────────────────────────
    //
    // The five legal triggers. Each applies one row of the navigation
    // table and is silently ignored when the current screen does not
    // match its precondition.

    /// Splash timer elapsed: Splash becomes Login.
    pub fn splash_timeout(&self) {
        self.apply(NavEvent::SplashTimedOut);
    }

    /// Login submit accepted: Login becomes Home.
    pub fn login_success(&self) {
        self.apply(NavEvent::LoginSucceeded);
    }

    /// Signup link followed from the login screen: Login becomes Signup.
    pub fn signup_requested(&self) {
        self.apply(NavEvent::SignupRequested);
    }

    /// Signup submit accepted: Signup becomes Home.
    pub fn signup_success(&self) {
        self.apply(NavEvent::SignupSucceeded);
    }

    /// Login link followed from the signup screen: Signup becomes Login.
    pub fn back_to_login(&self) {
        self.apply(NavEvent::BackToLogin);
    }

    /// Guarded compare-and-set. The precondition check and the write
    /// happen under the watch channel's internal lock, so concurrent
    /// callers cannot interleave between check and set.
    fn apply(&self, event: NavEvent) {
        self.inner.current.send_if_modified(|current| {
            if let Some(next) = transition(*current, event) {
                debug!(from = %current, to = %next, event = %event, "screen transition");
                *current = next;
                true
            } else {
                debug!(screen = %current, event = %event, "event ignored on this screen");
                false
            }
        });
    }
}

impl Default for ScreenRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RouterInner {
    fn drop(&mut self) {
        // Covers teardown paths that skip shutdown().
        self.cancel.cancel();
    }
}

/// One-shot delay, then the guarded splash transition. Cancellation wins
/// races against the deadline; an upgrade failure means the router is
/// already gone.
async fn splash_timer_task(router: Weak<RouterInner>, cancel: CancellationToken, delay: Duration) {
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            debug!("splash timer cancelled");
        }
        () = tokio::time::sleep(delay) => {
            if let Some(inner) = router.upgrade() {
                ScreenRouter { inner }.splash_timeout();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::time::{advance, timeout};

    use super::*;

    /// Drive a fresh router to the given screen through legal events.
    fn router_at(screen: Screen) -> ScreenRouter {
        let router = ScreenRouter::new();
        match screen {
            Screen::Splash => {}
            Screen::Login => router.splash_timeout(),
            Screen::Signup => {
                router.splash_timeout();
                router.signup_requested();
            }
            Screen::Home => {
                router.splash_timeout();
                router.login_success();
            }
        }
        assert_eq!(router.current(), screen);
        router
    }

    fn fire(router: &ScreenRouter, event: NavEvent) {
        match event {
            NavEvent::SplashTimedOut => router.splash_timeout(),
            NavEvent::LoginSucceeded => router.login_success(),
            NavEvent::SignupRequested => router.signup_requested(),
            NavEvent::SignupSucceeded => router.signup_success(),
            NavEvent::BackToLogin => router.back_to_login(),
        }
    }

    #[test]
    fn new_router_is_at_splash() {
        assert_eq!(ScreenRouter::new().current(), Screen::Splash);
    }

    #[test]
    fn illegal_events_never_move_the_router() {
        for screen in Screen::ALL {
            for event in NavEvent::ALL {
                if transition(screen, event).is_none() {
                    let router = router_at(screen);
                    fire(&router, event);
                    assert_eq!(
                        router.current(),
                        screen,
                        "{event} should be ignored on {screen}"
                    );
                }
            }
        }
    }

    #[test]
    fn login_success_before_the_timer_is_ignored() {
        let router = ScreenRouter::new();
        router.login_success();
        assert_eq!(router.current(), Screen::Splash);
    }

    #[test]
    fn signup_and_back_then_login_reaches_home() {
        let router = ScreenRouter::new();
        router.splash_timeout();
        router.signup_requested();
        router.back_to_login();
        router.login_success();
        assert_eq!(router.current(), Screen::Home);
    }

    #[test]
    fn signup_submit_reaches_home() {
        let router = ScreenRouter::new();
        router.splash_timeout();
        router.signup_requested();
        router.signup_success();
        assert_eq!(router.current(), Screen::Home);
    }

    #[test]
    fn duplicate_timeout_does_not_override_manual_navigation() {
        let router = ScreenRouter::new();
        router.splash_timeout();
        router.signup_requested();
        // Late duplicate of the timer callback.
        router.splash_timeout();
        assert_eq!(router.current(), Screen::Signup);
    }

    #[test]
    fn observers_wake_only_on_real_changes() {
        let router = ScreenRouter::new();
        let mut rx = router.subscribe();

        router.login_success();
        assert!(!rx.has_changed().expect("router alive"));

        router.splash_timeout();
        assert!(rx.has_changed().expect("router alive"));
        assert_eq!(*rx.borrow_and_update(), Screen::Login);
    }

    #[tokio::test(start_paused = true)]
    async fn splash_holds_until_the_full_delay_elapses() {
        let router = ScreenRouter::new();
        router.start().await;
        let mut rx = router.subscribe();

        assert_eq!(router.current(), Screen::Splash);
        advance(Duration::from_millis(2999)).await;
        assert_eq!(router.current(), Screen::Splash);

        timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("timer should fire")
            .expect("router alive");
        assert_eq!(router.current(), Screen::Login);
    }

    #[tokio::test(start_paused = true)]
    async fn arming_the_timer_twice_fires_once() {
        let router = ScreenRouter::new();
        router.start().await;
        router.start().await;
        let mut rx = router.subscribe();

        advance(Duration::from_millis(3001)).await;
        timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("timer should fire")
            .expect("router alive");
        assert_eq!(router.current(), Screen::Login);
        // No second notification pending.
        assert!(!rx.has_changed().expect("router alive"));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_before_the_timer_cancels_the_transition() {
        let router = ScreenRouter::new();
        let mut rx = router.subscribe();
        router.start().await;

        advance(Duration::from_millis(1000)).await;
        router.shutdown().await;
        advance(Duration::from_millis(5000)).await;

        assert_eq!(router.current(), Screen::Splash);
        assert!(!rx.has_changed().expect("router alive"));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_every_handle_disarms_the_timer() {
        let router = ScreenRouter::new();
        let mut rx = router.subscribe();
        router.start().await;
        drop(router);

        advance(Duration::from_millis(5000)).await;
        tokio::task::yield_now().await;

        // Sender gone without ever publishing a change.
        assert!(rx.has_changed().is_err());
        assert_eq!(*rx.borrow(), Screen::Splash);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_is_idempotent() {
        let router = ScreenRouter::new();
        router.start().await;
        router.shutdown().await;
        router.shutdown().await;
        assert_eq!(router.current(), Screen::Splash);
    }
}
