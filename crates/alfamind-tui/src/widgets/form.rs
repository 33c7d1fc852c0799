//! Form rendering helpers shared by the login and signup screens.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::theme;

/// Draw a centered, titled panel and return its inner area.
pub fn centered_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    width: u16,
    height: u16,
) -> Rect {
    let panel_w = width.min(area.width.saturating_sub(4));
    let panel_h = height.min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(panel_w)) / 2;
    let y = (area.height.saturating_sub(panel_h)) / 2;
    let panel = Rect::new(area.x + x, area.y + y, panel_w, panel_h);

    // Background
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BG_HIGHLIGHT)),
        panel,
    );

    // Border
    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, theme::title_style()),
            Span::raw(" "),
        ]))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused());

    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    inner
}

/// Label plus a bordered single-line text input.
///
/// Active inputs get a red border and a trailing block cursor; `masked`
/// renders one dot per typed character.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    active: bool,
    masked: bool,
) {
    if area.height < 4 {
        return;
    }

    let label_style = if active {
        Style::default().fg(theme::OFF_WHITE)
    } else {
        Style::default().fg(theme::LIGHT_GRAY)
    };
    let label_area = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(Paragraph::new(Span::styled(label, label_style)), label_area);

    let display = if masked {
        "\u{25CF}".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let border = if active {
        theme::border_focused()
    } else {
        theme::border_default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);

    let block_area = Rect::new(area.x, area.y + 1, area.width, 3);
    let inner = block.inner(block_area);
    frame.render_widget(block, block_area);

    let text = if active {
        format!("{display}\u{2588}")
    } else {
        display
    };
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(theme::OFF_WHITE))),
        inner,
    );
}

/// Centered action button.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, active: bool) {
    let style = if active {
        theme::button_focused()
    } else {
        theme::button_default()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!("  {label}  "), style))
            .alignment(Alignment::Center),
        area,
    );
}

/// Prefix text plus a highlighted link word (e.g. "Belum punya akun? Daftar").
pub fn render_link(frame: &mut Frame, area: Rect, prefix: &str, link: &str, active: bool) {
    let link_style = if active {
        theme::link_focused()
    } else {
        theme::link_default()
    };
    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(theme::LIGHT_GRAY)),
        Span::raw(" "),
        Span::styled(link, link_style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::render_input_field;
    use crate::screens::test_util::buffer_text;

    #[test]
    fn masked_fields_never_print_the_value() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| {
                render_input_field(frame, frame.area(), " Password", "rahasia", false, true);
            })
            .expect("draw");

        let text = buffer_text(terminal.backend().buffer());
        assert!(!text.contains("rahasia"));
        assert!(text.contains("●●●●●●●"));
    }

    #[test]
    fn active_fields_show_a_block_cursor() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| {
                render_input_field(frame, frame.area(), " Email", "andi", true, false);
            })
            .expect("draw");

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("andi█"));
    }

    #[test]
    fn tiny_areas_are_skipped_without_panicking() {
        let backend = TestBackend::new(30, 2);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| {
                render_input_field(frame, frame.area(), " Email", "andi", true, false);
            })
            .expect("draw");
    }
}
