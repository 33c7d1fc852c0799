//! Login screen — email/password form with a link to signup.
//!
//! Submitting the form emits `SubmitLogin`; the app layer talks to the
//! auth gateway and drives the router. The screen itself never decides
//! where navigation goes.

use alfamind_core::Credentials;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::form;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Email,
    Password,
    LoginButton,
    SignupLink,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::LoginButton,
            Self::LoginButton => Self::SignupLink,
            Self::SignupLink => Self::Email,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Email => Self::SignupLink,
            Self::Password => Self::Email,
            Self::LoginButton => Self::Password,
            Self::SignupLink => Self::LoginButton,
        }
    }
}

pub struct LoginScreen {
    focused: bool,
    email_input: String,
    password_input: String,
    field: Field,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            email_input: String::new(),
            password_input: String::new(),
            field: Field::Email,
        }
    }

    fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.field {
            Field::Email => Some(&mut self.email_input),
            Field::Password => Some(&mut self.password_input),
            Field::LoginButton | Field::SignupLink => None,
        }
    }

    /// Enter on an input moves on; on the button or link it acts.
    fn activate(&mut self) -> Option<Action> {
        match self.field {
            Field::Email | Field::Password => {
                self.field = self.field.next();
                None
            }
            Field::LoginButton => Some(Action::SubmitLogin(Credentials::new(
                self.email_input.trim(),
                self.password_input.clone(),
            ))),
            Field::SignupLink => Some(Action::SignupRequested),
        }
    }
}

impl Component for LoginScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.field = self.field.next(),
            KeyCode::BackTab | KeyCode::Up => self.field = self.field.prev(),
            KeyCode::Enter => return Ok(self.activate()),
            KeyCode::Backspace => {
                if let Some(input) = self.active_input_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.active_input_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::DARK_GRAY)),
            area,
        );

        let inner = form::centered_panel(frame, area, "Login", 46, 16);

        let layout = Layout::vertical([
            Constraint::Length(4), // email
            Constraint::Length(4), // password
            Constraint::Length(1),
            Constraint::Length(1), // button
            Constraint::Length(1),
            Constraint::Length(1), // signup link
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

        form::render_input_field(
            frame,
            layout[0],
            " Email",
            &self.email_input,
            self.field == Field::Email,
            false,
        );
        form::render_input_field(
            frame,
            layout[1],
            " Password",
            &self.password_input,
            self.field == Field::Password,
            true,
        );
        form::render_button(frame, layout[3], "Login", self.field == Field::LoginButton);
        form::render_link(
            frame,
            layout[5],
            "Belum punya akun?",
            "Daftar",
            self.field == Field::SignupLink,
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Tab pindah  Enter pilih  Ctrl+C keluar",
                theme::key_hint(),
            ))
            .alignment(Alignment::Center),
            layout[7],
        );
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "login"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use secrecy::ExposeSecret;

    use super::*;
    use crate::screens::test_util::buffer_text;

    fn press(screen: &mut LoginScreen, code: KeyCode) -> Option<Action> {
        screen.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    fn type_str(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn tab_cycles_through_all_fields() {
        let mut screen = LoginScreen::new();
        assert_eq!(screen.field, Field::Email);
        press(&mut screen, KeyCode::Tab);
        assert_eq!(screen.field, Field::Password);
        press(&mut screen, KeyCode::Tab);
        assert_eq!(screen.field, Field::LoginButton);
        press(&mut screen, KeyCode::Tab);
        assert_eq!(screen.field, Field::SignupLink);
        press(&mut screen, KeyCode::Tab);
        assert_eq!(screen.field, Field::Email);
    }

    #[test]
    fn back_tab_cycles_in_reverse() {
        let mut screen = LoginScreen::new();
        press(&mut screen, KeyCode::BackTab);
        assert_eq!(screen.field, Field::SignupLink);
        press(&mut screen, KeyCode::BackTab);
        assert_eq!(screen.field, Field::LoginButton);
    }

    #[test]
    fn typing_and_backspace_edit_the_active_field() {
        let mut screen = LoginScreen::new();
        type_str(&mut screen, "andi@x");
        press(&mut screen, KeyCode::Backspace);
        assert_eq!(screen.email_input, "andi@");

        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "rahasia");
        assert_eq!(screen.password_input, "rahasia");
        assert_eq!(screen.email_input, "andi@");
    }

    #[test]
    fn enter_on_inputs_advances_without_submitting() {
        let mut screen = LoginScreen::new();
        assert!(press(&mut screen, KeyCode::Enter).is_none());
        assert_eq!(screen.field, Field::Password);
        assert!(press(&mut screen, KeyCode::Enter).is_none());
        assert_eq!(screen.field, Field::LoginButton);
    }

    #[test]
    fn enter_on_the_button_submits_typed_credentials() {
        let mut screen = LoginScreen::new();
        type_str(&mut screen, "  andi@alfamind.example ");
        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "rahasia");
        press(&mut screen, KeyCode::Tab);

        let action = press(&mut screen, KeyCode::Enter);
        let Some(Action::SubmitLogin(creds)) = action else {
            panic!("expected SubmitLogin, got {action:?}");
        };
        assert_eq!(creds.email, "andi@alfamind.example");
        assert_eq!(creds.password.expose_secret(), "rahasia");
    }

    #[test]
    fn enter_on_the_link_requests_signup() {
        let mut screen = LoginScreen::new();
        press(&mut screen, KeyCode::BackTab);
        let action = press(&mut screen, KeyCode::Enter);
        assert!(matches!(action, Some(Action::SignupRequested)));
    }

    #[test]
    fn renders_form_with_masked_password() {
        let mut screen = LoginScreen::new();
        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "rahasia");

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| screen.render(frame, frame.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Login"));
        assert!(text.contains("Belum punya akun?"));
        assert!(text.contains("Daftar"));
        assert!(!text.contains("rahasia"));
        assert!(text.contains("\u{25CF}".repeat(7).as_str()));
    }
}
