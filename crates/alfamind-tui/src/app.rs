//! Application core — event loop, screen management, action dispatch.
//!
//! The router is the single source of truth for which screen is
//! visible. Key handling and form submissions only feed it events; the
//! visible component swaps when the router's watch channel reports a
//! change.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use alfamind_core::{AuthGateway, Screen, ScreenRouter, StoreProfile};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screens::create_screens;
use crate::transition::{self, Crossfade, FADE_DURATION};
use crate::tui::Tui;

/// Runtime knobs resolved from config and CLI flags.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// How long the splash screen stays up before the router moves on.
    pub splash_duration: Duration,
    /// Disable the crossfade on screen changes.
    pub reduce_motion: bool,
    /// Store identity for the Home profile card.
    pub profile: StoreProfile,
}

/// Top-level application state and event loop.
pub struct App {
    /// Navigation state machine; owns the splash timer.
    router: ScreenRouter,
    /// Authentication seam behind the login and signup forms.
    auth: Arc<dyn AuthGateway>,
    settings: AppSettings,
    /// Component currently receiving input and being rendered.
    active_screen: Screen,
    /// All screen components, keyed by router state.
    screens: HashMap<Screen, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Crossfade in progress after the latest screen change.
    fade: Option<Crossfade>,
    /// Action sender — components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(router: ScreenRouter, auth: Arc<dyn AuthGateway>, settings: AppSettings) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let screens: HashMap<Screen, Box<dyn Component>> =
            create_screens(&settings.profile).into_iter().collect();
        let active_screen = router.current();

        Self {
            router,
            auth,
            settings,
            active_screen,
            screens,
            running: true,
            fade: None,
            action_tx,
            action_rx,
        }
    }

    /// Initialize all screen components with the action sender.
    fn init_screens(&mut self) -> Result<()> {
        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        Ok(())
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.init_screens()?;

        // Seed layout state before the first frame
        let (width, height) = tui.size().unwrap_or((80, 24));
        self.action_tx.send(Action::Resize(width, height))?;

        // Subscribe before arming the timer so no transition is missed
        let mut screen_rx = self.router.subscribe();
        self.router.start_after(self.settings.splash_duration).await;

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event or router movement
            tokio::select! {
                maybe_event = events.next() => {
                    let Some(event) = maybe_event else {
                        break;
                    };

                    // 2. Map event → action(s)
                    match event {
                        Event::Key(key) => {
                            if let Some(action) = self.handle_key_event(key)? {
                                self.action_tx.send(action)?;
                            }
                        }
                        Event::Resize(w, h) => {
                            self.action_tx.send(Action::Resize(w, h))?;
                        }
                        Event::Tick => {
                            self.action_tx.send(Action::Tick)?;
                        }
                        Event::Render => {
                            self.action_tx.send(Action::Render)?;
                        }
                    }
                }

                changed = screen_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let screen = *screen_rx.borrow_and_update();
                    self.action_tx.send(Action::ScreenChanged(screen))?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        self.router.shutdown().await;
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Ctrl+C is global; everything else
    /// is delegated to the active screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }
        Ok(None)
    }

    /// Process a single action — update app state and propagate to components.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::ScreenChanged(target) => {
                self.switch_screen(*target);
            }

            Action::SignupRequested => {
                self.router.signup_requested();
            }

            Action::BackToLogin => {
                self.router.back_to_login();
            }

            Action::SubmitLogin(credentials) => match self.auth.login(credentials) {
                Ok(session) => {
                    info!(email = %session.email, "login accepted");
                    self.router.login_success();
                }
                Err(err) => {
                    warn!(%err, "login failed");
                }
            },

            Action::SubmitSignup(request) => match self.auth.register(request) {
                Ok(session) => {
                    info!(email = %session.email, "signup accepted");
                    self.router.signup_success();
                }
                Err(err) => {
                    warn!(%err, "signup failed");
                }
            },

            // Every screen tracks the terminal size, visible or not
            Action::Resize(_, _) => {
                for screen in self.screens.values_mut() {
                    if let Some(follow_up) = screen.update(action)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            Action::Render => {
                if self.fade.is_some_and(Crossfade::finished) {
                    self.fade = None;
                }
            }

            // Propagate everything else to the active screen
            other => {
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    if let Some(follow_up) = screen.update(other)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Swap the visible component after the router moved.
    fn switch_screen(&mut self, target: Screen) {
        if target == self.active_screen {
            return;
        }
        debug!(
            "screen change: {} → {}",
            self.active_screen.label(),
            target.label()
        );

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(false);
        }
        self.active_screen = target;
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }

        self.fade = if self.settings.reduce_motion {
            None
        } else {
            Some(Crossfade::new(FADE_DURATION))
        };
    }

    /// Render the active screen, with the crossfade layered on top.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, area);
        }
        if let Some(fade) = self.fade {
            transition::fade_in(frame.buffer_mut(), area, fade.progress());
        }
    }
}
