//! Screen crossfade — a short fade-in applied after each navigation.
//!
//! Rendering stays immediate-mode: the incoming screen draws normally and
//! the fade post-processes the finished frame buffer, blending every
//! cell's colors from the background toward their rendered values.

use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::theme;

/// How long the fade after a screen change runs.
pub const FADE_DURATION: Duration = Duration::from_millis(250);

/// An in-progress fade-in, started at the moment of the screen change.
#[derive(Debug, Clone, Copy)]
pub struct Crossfade {
    started: Instant,
    duration: Duration,
}

impl Crossfade {
    pub fn new(duration: Duration) -> Self {
        Self {
            started: Instant::now(),
            duration,
        }
    }

    /// Fade progress in `0.0..=1.0`; `1.0` is fully visible.
    pub fn progress(self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.started.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn finished(self) -> bool {
        self.started.elapsed() >= self.duration
    }
}

/// Blend every cell in `area` from the terminal background toward its
/// rendered color. `progress` 0.0 shows pure background, 1.0 the frame
/// as drawn.
pub fn fade_in(buf: &mut Buffer, area: Rect, progress: f32) {
    if progress >= 1.0 {
        return;
    }
    let t = progress.clamp(0.0, 1.0);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.fg = blend(theme::DARK_GRAY, cell.fg, t);
                cell.bg = blend(theme::DARK_GRAY, cell.bg, t);
            }
        }
    }
}

/// Linear RGB interpolation from `from` to `to`.
///
/// Non-RGB colors (Reset, indexed) cannot be interpolated; they snap at
/// the midpoint so the fade degrades gracefully without truecolor.
fn blend(from: Color, to: Color, t: f32) -> Color {
    let Color::Rgb(r0, g0, b0) = from else {
        return if t < 0.5 { from } else { to };
    };
    let Color::Rgb(r1, g1, b1) = to else {
        return if t < 0.5 { from } else { to };
    };
    Color::Rgb(lerp(r0, r1, t), lerp(g0, g1, t), lerp(b0, b1, t))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
fn lerp(a: u8, b: u8, t: f32) -> u8 {
    let a = f32::from(a);
    let b = f32::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use ratatui::style::Style;

    use super::{Crossfade, Duration, blend, fade_in};
    use crate::theme;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;

    #[test]
    fn zero_duration_is_immediately_finished() {
        let fade = Crossfade::new(Duration::ZERO);
        assert!(fade.finished());
        assert!(fade.progress() >= 1.0);
    }

    #[test]
    fn blend_endpoints_return_the_terminal_colors() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(blend(from, to, 0.0), from);
        assert_eq!(blend(from, to, 1.0), to);
    }

    #[test]
    fn blend_midpoint_is_halfway() {
        let mixed = blend(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5);
        assert_eq!(mixed, Color::Rgb(100, 50, 25));
    }

    #[test]
    fn non_rgb_colors_snap_at_the_midpoint() {
        let from = Color::Rgb(0, 0, 0);
        assert_eq!(blend(from, Color::Reset, 0.25), from);
        assert_eq!(blend(from, Color::Reset, 0.75), Color::Reset);
    }

    #[test]
    fn fade_start_paints_the_background_color() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "toko", Style::default().fg(Color::Rgb(250, 250, 250)));

        fade_in(&mut buf, area, 0.0);
        assert_eq!(buf[(0, 0)].fg, theme::DARK_GRAY);
    }

    #[test]
    fn completed_fade_leaves_the_buffer_untouched() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "toko", Style::default().fg(Color::Rgb(250, 250, 250)));

        fade_in(&mut buf, area, 1.0);
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(250, 250, 250));
    }
}
