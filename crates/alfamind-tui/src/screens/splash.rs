//! Splash screen — branding shown while the router waits out its timer.
//!
//! Purely presentational: the transition to Login is driven by the
//! router's scheduled timeout, never by input on this screen.

use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::logo;

const TAGLINE: &str = "Toko virtual untuk komunitas Anda";

pub struct SplashScreen {
    focused: bool,
    throbber_state: throbber_widgets_tui::ThrobberState,
}

impl SplashScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }
}

impl Component for SplashScreen {
    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if matches!(action, Action::Tick) {
            self.throbber_state.calc_next();
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        // Full-screen dark background
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::DARK_GRAY)),
            area,
        );

        // Center the 6-row brand block vertically
        let top = area.height.saturating_sub(6) / 2;
        let layout = Layout::vertical([
            Constraint::Length(top),
            Constraint::Length(2), // wordmark
            Constraint::Length(1),
            Constraint::Length(1), // tagline
            Constraint::Length(1),
            Constraint::Length(1), // throbber
            Constraint::Min(0),
        ])
        .split(area);

        for (i, line) in logo::WORDMARK_LINES.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
            let row = Rect::new(
                layout[1].x,
                layout[1].y + i as u16,
                layout[1].width,
                1,
            );
            frame.render_widget(
                Paragraph::new(Span::styled(
                    *line,
                    Style::default()
                        .fg(theme::BRIGHT_RED)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
                row,
            );
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                TAGLINE,
                Style::default().fg(theme::LIGHT_GRAY),
            ))
            .alignment(Alignment::Center),
            layout[3],
        );

        // The throbber draws left-aligned, so center its box by hand
        let throbber_width = 22;
        let throbber_area = Rect::new(
            area.x + area.width.saturating_sub(throbber_width) / 2,
            layout[5].y,
            throbber_width.min(area.width),
            1,
        );
        let throbber = throbber_widgets_tui::Throbber::default()
            .label("Menyiapkan toko...")
            .style(Style::default().fg(theme::LIGHT_GRAY))
            .throbber_style(Style::default().fg(theme::BRIGHT_RED));
        frame.render_stateful_widget(throbber, throbber_area, &mut self.throbber_state.clone());

        // Version bottom-right
        if area.height > 0 {
            let version_row = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    concat!("v", env!("CARGO_PKG_VERSION")),
                    Style::default().fg(theme::BORDER_GRAY),
                ))
                .alignment(Alignment::Right),
                version_row,
            );
        }
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "splash"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::screens::test_util::buffer_text;

    #[test]
    fn renders_wordmark_and_tagline() {
        let screen = SplashScreen::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|frame| screen.render(frame, frame.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Toko virtual untuk komunitas Anda"));
        assert!(text.contains("Menyiapkan toko..."));
        assert!(text.contains(concat!("v", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn ticks_advance_the_throbber() {
        let mut screen = SplashScreen::new();
        let before = screen.throbber_state.index();
        screen.update(&Action::Tick).unwrap();
        assert_ne!(screen.throbber_state.index(), before);
    }

    #[test]
    fn keys_produce_no_actions() {
        use crossterm::event::{KeyCode, KeyEvent};

        let mut screen = SplashScreen::new();
        let action = screen
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert!(action.is_none());
    }
}
