//! Home screen — the storefront. Brand bar, owner profile card, and a
//! two-column staggered product grid.
//!
//! Cards have uneven heights, so the grid is laid out off-screen into a
//! scratch buffer and the visible window is blitted out. Scrolling is a
//! row offset into that canvas.

use alfamind_core::{PRODUCTS, Product, StoreProfile};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::{art, logo, price_fmt};

/// Rows taken by the brand bar, profile card, and key hints.
const CHROME_ROWS: u16 = 7;
/// Vertical gap between stacked cards.
const CARD_GAP: u16 = 1;

pub struct HomeScreen {
    focused: bool,
    profile: StoreProfile,
    scroll: u16,
    grid_viewport: u16,
}

impl HomeScreen {
    pub fn new(profile: StoreProfile) -> Self {
        Self {
            focused: false,
            profile,
            scroll: 0,
            grid_viewport: 17,
        }
    }

    fn max_scroll(&self) -> u16 {
        grid_height().saturating_sub(self.grid_viewport)
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = i32::from(self.max_scroll());
        let next = (i32::from(self.scroll) + delta).clamp(0, max);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::as_conversions)]
        {
            self.scroll = next as u16;
        }
    }

    fn render_brand_bar(&self, frame: &mut Frame, area: Rect) {
        let bar = Line::from(vec![
            Span::styled(
                logo::WORDMARK_COMPACT,
                Style::default()
                    .fg(theme::OFF_WHITE)
                    .bg(theme::BRIGHT_RED)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", self.profile.store_name),
                Style::default().fg(theme::OFF_WHITE).bg(theme::BRIGHT_RED),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(bar).style(Style::default().bg(theme::BRIGHT_RED)),
            area,
        );
    }

    fn render_profile_card(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BRIGHT_RED))
            .style(Style::default().bg(theme::BLOOD_RED));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                self.profile.owner_name.clone(),
                Style::default()
                    .fg(theme::OFF_WHITE)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.profile.owner_email.clone(),
                Style::default().fg(theme::LIGHT_GRAY),
            )),
            Line::from(Span::styled(
                format!("Pemilik toko {}", self.profile.store_name),
                Style::default().fg(theme::LIGHT_GRAY),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect) {
        if area.width < 12 || area.height == 0 {
            return;
        }

        let col_w = area.width.saturating_sub(CARD_GAP) / 2;
        let col_x = [0, col_w + CARD_GAP];

        let heights: Vec<u16> = PRODUCTS.iter().map(card_height).collect();
        let (placements, _) = stagger_layout(&heights, CARD_GAP);

        let total = grid_height().max(1);
        let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, total));
        canvas.set_style(canvas.area, Style::default().bg(theme::DARK_GRAY));

        for (product, &(col, y)) in PRODUCTS.iter().zip(placements.iter()) {
            let card = Rect::new(col_x[col], y, col_w, card_height(product));
            render_card(&mut canvas, card, product);
        }

        // Blit the visible window out of the canvas
        let visible = area.height.min(total.saturating_sub(self.scroll));
        for row in 0..visible {
            for x in 0..area.width {
                let Some(src) = canvas.cell((x, self.scroll + row)) else {
                    continue;
                };
                if let Some(dst) = frame.buffer_mut().cell_mut((area.x + x, area.y + row)) {
                    *dst = src.clone();
                }
            }
        }
    }
}

/// Place each card into the currently shorter of two columns; ties go
/// left. Returns per-card (column, row offset) and the final column
/// heights including trailing gaps.
fn stagger_layout(heights: &[u16], gap: u16) -> (Vec<(usize, u16)>, [u16; 2]) {
    let mut cols = [0u16, 0u16];
    let mut placements = Vec::with_capacity(heights.len());
    for &h in heights {
        let col = usize::from(cols[1] < cols[0]);
        placements.push((col, cols[col]));
        cols[col] += h + gap;
    }
    (placements, cols)
}

/// Full grid height in rows, independent of terminal size.
fn grid_height() -> u16 {
    let heights: Vec<u16> = PRODUCTS.iter().map(card_height).collect();
    let (_, cols) = stagger_layout(&heights, CARD_GAP);
    cols.iter()
        .map(|h| h.saturating_sub(CARD_GAP))
        .max()
        .unwrap_or(0)
}

#[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
fn card_height(product: &Product) -> u16 {
    // art + name + price + borders
    art::resolve(product.image).len() as u16 + 4
}

fn render_card(buf: &mut Buffer, area: Rect, product: &Product) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER_GRAY))
        .style(Style::default().bg(theme::BG_HIGHLIGHT));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = art::resolve(product.image);
    for (i, line) in lines.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
        let w = line.chars().count() as u16;
        #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
        let y = inner.y + i as u16;
        let x = inner.x + inner.width.saturating_sub(w) / 2;
        buf.set_string(x, y, line, Style::default().fg(theme::LIGHT_GRAY));
    }

    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    let art_rows = lines.len() as u16;
    center_string(
        buf,
        inner,
        art_rows,
        product.name,
        Style::default().fg(theme::OFF_WHITE),
    );
    center_string(
        buf,
        inner,
        art_rows + 1,
        &price_fmt::format_rupiah(product.price_idr),
        theme::price_style(),
    );
}

fn center_string(buf: &mut Buffer, inner: Rect, row: u16, text: &str, style: Style) {
    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    let w = text.chars().count() as u16;
    let x = inner.x + inner.width.saturating_sub(w) / 2;
    buf.set_string(x, inner.y + row, text, style);
}

impl Component for HomeScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('q') => return Ok(Some(Action::Quit)),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::Char('g') => self.scroll = 0,
            KeyCode::Char('G') => self.scroll = self.max_scroll(),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::Resize(_, height) = action {
            self.grid_viewport = height.saturating_sub(CHROME_ROWS).max(1);
            self.scroll = self.scroll.min(self.max_scroll());
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::DARK_GRAY)),
            area,
        );

        let layout = Layout::vertical([
            Constraint::Length(1), // brand bar
            Constraint::Length(5), // profile card
            Constraint::Min(1),    // product grid
            Constraint::Length(1), // hints
        ])
        .split(area);

        self.render_brand_bar(frame, layout[0]);
        self.render_profile_card(frame, layout[1]);
        self.render_grid(frame, layout[2]);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "j/k gulir  g/G awal/akhir  q keluar",
                theme::key_hint(),
            ))
            .alignment(Alignment::Center),
            layout[3],
        );
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "home"
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
    fn stagger_fills_the_shorter_column_first() {
        let (placements, cols) = stagger_layout(&[4, 6, 3, 3], 1);
        assert_eq!(placements, vec![(0, 0), (1, 0), (0, 5), (1, 7)]);
        assert_eq!(cols, [9, 11]);
    }

    #[test]
    fn stagger_prefers_the_left_column_on_ties() {
        let (placements, _) = stagger_layout(&[2, 2, 2], 0);
        assert_eq!(placements, vec![(0, 0), (1, 0), (0, 2)]);
    }

    #[test]
    fn scrolling_clamps_to_the_grid() {
        let mut screen = HomeScreen::new(StoreProfile::default());
        screen.scroll_by(-5);
        assert_eq!(screen.scroll, 0);

        screen.scroll_by(i32::from(u16::MAX));
        assert_eq!(screen.scroll, screen.max_scroll());
        assert!(screen.max_scroll() > 0);
    }

    #[test]
    fn g_and_shift_g_jump_to_the_edges() {
        let mut screen = HomeScreen::new(StoreProfile::default());
        screen
            .handle_key_event(KeyEvent::from(KeyCode::Char('G')))
            .unwrap();
        assert_eq!(screen.scroll, screen.max_scroll());
        screen
            .handle_key_event(KeyEvent::from(KeyCode::Char('g')))
            .unwrap();
        assert_eq!(screen.scroll, 0);
    }

    #[test]
    fn q_requests_quit() {
        let mut screen = HomeScreen::new(StoreProfile::default());
        let action = screen
            .handle_key_event(KeyEvent::from(KeyCode::Char('q')))
            .unwrap();
        assert!(matches!(action, Some(Action::Quit)));
    }

    #[test]
    fn resize_shrinks_the_viewport_and_clamps_scroll() {
        let mut screen = HomeScreen::new(StoreProfile::default());
        screen.scroll = screen.max_scroll();
        let before = screen.scroll;

        screen.update(&Action::Resize(80, 40)).unwrap();
        assert_eq!(screen.grid_viewport, 33);
        assert!(screen.scroll <= before);
    }

    #[test]
    fn renders_profile_and_priced_products() {
        let screen = HomeScreen::new(StoreProfile::default());
        let mut terminal = Terminal::new(TestBackend::new(64, 30)).unwrap();
        terminal
            .draw(|frame| screen.render(frame, frame.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Andi Pratama"));
        assert!(text.contains("andi@alfamind.example"));
        assert!(text.contains("Pemilik toko Alfamind"));
        assert!(text.contains("Rp"));
    }
}
