//! # ScreenCard Component
//!
//! Draws one screen as a filled, bordered card. The card's `Keyframe`
//! decides where it lands: the horizontal offset is in columns, scale
//! shrinks the card around the stage center, and low opacity dims it.

use std::str::FromStr;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::core::transition::Keyframe;
use crate::tui::component::Component;

/// Below this opacity the card is not drawn.
const HIDDEN_OPACITY: f32 = 0.05;
/// Below this opacity the card is drawn dimmed.
const DIM_OPACITY: f32 = 0.6;

pub struct ScreenCard {
    pub title: String,
    pub background: Option<String>,
    pub keyframe: Keyframe,
}

impl ScreenCard {
    pub fn new(title: String, background: Option<String>, keyframe: Keyframe) -> Self {
        Self {
            title,
            background,
            keyframe,
        }
    }
}

impl Component for ScreenCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.keyframe.opacity < HIDDEN_OPACITY {
            return;
        }
        let Some(card) = card_rect(area, &self.keyframe) else {
            return;
        };

        let bg = self
            .background
            .as_deref()
            .map(parse_color)
            .unwrap_or(Color::White);
        let mut style = Style::default().bg(bg).fg(text_color(bg));
        if self.keyframe.opacity < DIM_OPACITY {
            style = style.add_modifier(Modifier::DIM);
        }

        let paragraph = Paragraph::new(self.title.as_str())
            .block(Block::bordered().title(" screen "))
            .alignment(Alignment::Center)
            .style(style);

        frame.render_widget(Clear, card);
        frame.render_widget(paragraph, card);
    }
}

/// Where a card with `keyframe` lands inside `area`, clipped to it.
pub fn card_rect(area: Rect, keyframe: &Keyframe) -> Option<Rect> {
    let scale = keyframe.scale.clamp(0.0, 1.0);
    let width = (f32::from(area.width) * scale).round() as i32;
    let height = (f32::from(area.height) * scale).round() as i32;
    if width <= 0 || height <= 0 {
        return None;
    }

    let left = i32::from(area.x) + (i32::from(area.width) - width) / 2 + keyframe.offset_x.round() as i32;
    let top = i32::from(area.y) + (i32::from(area.height) - height) / 2;
    let right = (left + width).min(i32::from(area.x) + i32::from(area.width));
    let left = left.max(i32::from(area.x));
    if right <= left {
        return None;
    }

    Some(Rect::new(left as u16, top as u16, (right - left) as u16, height as u16))
}

/// Color names ratatui knows, plus a few it does not.
pub fn parse_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "navy" => Color::Blue,
        "purple" => Color::Magenta,
        "orange" => Color::LightRed,
        other => Color::from_str(other).unwrap_or(Color::White),
    }
}

fn text_color(bg: Color) -> Color {
    match bg {
        Color::White | Color::Yellow | Color::LightYellow | Color::Green | Color::LightGreen
        | Color::Cyan | Color::LightCyan | Color::Gray => Color::Black,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_resting_card_fills_area() {
        let area = Rect::new(0, 1, 40, 10);
        assert_eq!(card_rect(area, &Keyframe::RESTING), Some(area));
    }

    #[test]
    fn test_offset_card_is_clipped() {
        let area = Rect::new(0, 0, 40, 10);
        let frame = Keyframe {
            opacity: 1.0,
            offset_x: 30.0,
            scale: 1.0,
        };
        assert_eq!(card_rect(area, &frame), Some(Rect::new(30, 0, 10, 10)));

        let gone = Keyframe {
            offset_x: -40.0,
            ..frame
        };
        assert_eq!(card_rect(area, &gone), None);
    }

    #[test]
    fn test_scaled_card_is_centered() {
        let area = Rect::new(0, 0, 40, 10);
        let frame = Keyframe {
            opacity: 1.0,
            offset_x: 0.0,
            scale: 0.5,
        };
        assert_eq!(card_rect(area, &frame), Some(Rect::new(10, 2, 20, 5)));
        let zero = Keyframe { scale: 0.0, ..frame };
        assert_eq!(card_rect(area, &zero), None);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("red"), Color::Red);
        assert_eq!(parse_color("navy"), Color::Blue);
        assert_eq!(parse_color("no-such-color"), Color::White);
    }

    #[test]
    fn test_card_renders_title() {
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut card = ScreenCard::new("Home Screen".to_string(), Some("navy".to_string()), Keyframe::RESTING);
        terminal.draw(|f| card.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Home Screen"));
    }
}
