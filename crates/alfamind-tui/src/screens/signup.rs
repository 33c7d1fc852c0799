//! Signup screen — registration form reached from the login screen.
//!
//! Esc or the "Sudah punya akun? Login" link navigates back without
//! submitting anything.

use alfamind_core::SignupRequest;
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
    Username,
    Email,
    Password,
    Confirm,
    SignupButton,
    LoginLink,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::Username => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::Confirm,
            Self::Confirm => Self::SignupButton,
            Self::SignupButton => Self::LoginLink,
            Self::LoginLink => Self::Username,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Username => Self::LoginLink,
            Self::Email => Self::Username,
            Self::Password => Self::Email,
            Self::Confirm => Self::Password,
            Self::SignupButton => Self::Confirm,
            Self::LoginLink => Self::SignupButton,
        }
    }
}

pub struct SignupScreen {
    focused: bool,
    username_input: String,
    email_input: String,
    password_input: String,
    confirm_input: String,
    field: Field,
}

impl SignupScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            username_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            confirm_input: String::new(),
            field: Field::Username,
        }
    }

    fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.field {
            Field::Username => Some(&mut self.username_input),
            Field::Email => Some(&mut self.email_input),
            Field::Password => Some(&mut self.password_input),
            Field::Confirm => Some(&mut self.confirm_input),
            Field::SignupButton | Field::LoginLink => None,
        }
    }

    fn activate(&mut self) -> Option<Action> {
        match self.field {
            Field::Username | Field::Email | Field::Password | Field::Confirm => {
                self.field = self.field.next();
                None
            }
            Field::SignupButton => Some(Action::SubmitSignup(SignupRequest::new(
                self.username_input.trim(),
                self.email_input.trim(),
                self.password_input.clone(),
            ))),
            Field::LoginLink => Some(Action::BackToLogin),
        }
    }
}

impl Component for SignupScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc => return Ok(Some(Action::BackToLogin)),
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

        let inner = form::centered_panel(frame, area, "Daftar", 46, 23);

        let layout = Layout::vertical([
            Constraint::Length(4), // username
            Constraint::Length(4), // email
            Constraint::Length(4), // password
            Constraint::Length(4), // confirm
            Constraint::Length(1),
            Constraint::Length(1), // button
            Constraint::Length(1),
            Constraint::Length(1), // login link
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

        form::render_input_field(
            frame,
            layout[0],
            " Username",
            &self.username_input,
            self.field == Field::Username,
            false,
        );
        form::render_input_field(
            frame,
            layout[1],
            " Email",
            &self.email_input,
            self.field == Field::Email,
            false,
        );
        form::render_input_field(
            frame,
            layout[2],
            " Password",
            &self.password_input,
            self.field == Field::Password,
            true,
        );
        form::render_input_field(
            frame,
            layout[3],
            " Konfirmasi Password",
            &self.confirm_input,
            self.field == Field::Confirm,
            true,
        );
        form::render_button(frame, layout[5], "Daftar", self.field == Field::SignupButton);
        form::render_link(
            frame,
            layout[7],
            "Sudah punya akun?",
            "Login",
            self.field == Field::LoginLink,
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Tab pindah  Enter pilih  Esc kembali",
                theme::key_hint(),
            ))
            .alignment(Alignment::Center),
            layout[9],
        );
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "signup"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::screens::test_util::buffer_text;

    fn press(screen: &mut SignupScreen, code: KeyCode) -> Option<Action> {
        screen.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    fn type_str(screen: &mut SignupScreen, text: &str) {
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn esc_navigates_back_to_login() {
        let mut screen = SignupScreen::new();
        let action = press(&mut screen, KeyCode::Esc);
        assert!(matches!(action, Some(Action::BackToLogin)));
    }

    #[test]
    fn the_login_link_navigates_back() {
        let mut screen = SignupScreen::new();
        press(&mut screen, KeyCode::BackTab);
        assert_eq!(screen.field, Field::LoginLink);
        let action = press(&mut screen, KeyCode::Enter);
        assert!(matches!(action, Some(Action::BackToLogin)));
    }

    #[test]
    fn enter_on_the_button_submits_the_request() {
        let mut screen = SignupScreen::new();
        type_str(&mut screen, " andi ");
        press(&mut screen, KeyCode::Enter);
        type_str(&mut screen, "andi@alfamind.example");
        press(&mut screen, KeyCode::Enter);
        type_str(&mut screen, "rahasia");
        press(&mut screen, KeyCode::Enter);
        type_str(&mut screen, "rahasia");
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.field, Field::SignupButton);

        let action = press(&mut screen, KeyCode::Enter);
        let Some(Action::SubmitSignup(request)) = action else {
            panic!("expected SubmitSignup, got {action:?}");
        };
        assert_eq!(request.username, "andi");
        assert_eq!(request.email, "andi@alfamind.example");
    }

    #[test]
    fn confirm_field_edits_independently() {
        let mut screen = SignupScreen::new();
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "abc");
        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "xyz");
        assert_eq!(screen.password_input, "abc");
        assert_eq!(screen.confirm_input, "xyz");
    }

    #[test]
    fn renders_all_four_fields_and_links() {
        let screen = SignupScreen::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 26)).unwrap();
        terminal
            .draw(|frame| screen.render(frame, frame.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Daftar"));
        assert!(text.contains("Username"));
        assert!(text.contains("Konfirmasi Password"));
        assert!(text.contains("Sudah punya akun?"));
    }
}
