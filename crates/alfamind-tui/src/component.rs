//! Component trait — the contract between the app loop and each screen.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;

/// A renderable, input-handling unit of the TUI.
///
/// Screens implement this; the app drives them through the action loop.
/// All methods except [`render`](Component::render) and
/// [`id`](Component::id) have no-op defaults.
pub trait Component: Send {
    /// Called once at startup with the action sender.
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    /// Handle a key event. Returns an action to dispatch, if any.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// React to an action. Returns a follow-up action, if any.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render this component into the given area.
    fn render(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has input focus.
    fn focused(&self) -> bool {
        false
    }

    /// Grant or revoke input focus.
    fn set_focused(&mut self, _focused: bool) {}

    /// Stable identifier for logging.
    fn id(&self) -> &str;
}
