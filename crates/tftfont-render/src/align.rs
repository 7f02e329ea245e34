//! Placing a measured text box inside a rectangle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::TextMetrics;

/// A rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The nine text alignment modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    TopLeft,
    TopMid,
    TopRight,
    MidLeft,
    #[default]
    MidMid,
    MidRight,
    BotLeft,
    BotMid,
    BotRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    Left,
    Mid,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertical {
    Top,
    Mid,
    Bot,
}

impl Align {
    pub const ALL: [Align; 9] = [
        Align::TopLeft,
        Align::TopMid,
        Align::TopRight,
        Align::MidLeft,
        Align::MidMid,
        Align::MidRight,
        Align::BotLeft,
        Align::BotMid,
        Align::BotRight,
    ];

    /// GUIslice constant name, e.g. `GSLC_ALIGN_MID_MID`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::TopLeft => "GSLC_ALIGN_TOP_LEFT",
            Align::TopMid => "GSLC_ALIGN_TOP_MID",
            Align::TopRight => "GSLC_ALIGN_TOP_RIGHT",
            Align::MidLeft => "GSLC_ALIGN_MID_LEFT",
            Align::MidMid => "GSLC_ALIGN_MID_MID",
            Align::MidRight => "GSLC_ALIGN_MID_RIGHT",
            Align::BotLeft => "GSLC_ALIGN_BOT_LEFT",
            Align::BotMid => "GSLC_ALIGN_BOT_MID",
            Align::BotRight => "GSLC_ALIGN_BOT_RIGHT",
        }
    }

    fn split(self) -> (Vertical, Horizontal) {
        match self {
            Align::TopLeft => (Vertical::Top, Horizontal::Left),
            Align::TopMid => (Vertical::Top, Horizontal::Mid),
            Align::TopRight => (Vertical::Top, Horizontal::Right),
            Align::MidLeft => (Vertical::Mid, Horizontal::Left),
            Align::MidMid => (Vertical::Mid, Horizontal::Mid),
            Align::MidRight => (Vertical::Mid, Horizontal::Right),
            Align::BotLeft => (Vertical::Bot, Horizontal::Left),
            Align::BotMid => (Vertical::Bot, Horizontal::Mid),
            Align::BotRight => (Vertical::Bot, Horizontal::Right),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown alignment '{0}'")]
pub struct UnknownAlign(pub String);

impl FromStr for Align {
    type Err = UnknownAlign;

    /// Accepts `GSLC_ALIGN_TOP_LEFT` or `top-left`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase().replace('-', "_");
        let key = key.strip_prefix("GSLC_ALIGN_").unwrap_or(&key);
        Align::ALL
            .into_iter()
            .find(|a| a.as_str().strip_prefix("GSLC_ALIGN_") == Some(key))
            .ok_or_else(|| UnknownAlign(s.to_string()))
    }
}

/// Pen position that places the text box inside `rect`.
///
/// The nominal box position is computed from the mode and `margin`, then the
/// metrics origin is subtracted so the ink, not the pen, lands there. The
/// result never sits at or left of `rect.x`: such an x becomes `rect.x + 1`.
pub fn resolve(rect: Rect, metrics: &TextMetrics, align: Align, margin: i32) -> (i32, i32) {
    let (w, h) = (rect.width as i32, rect.height as i32);
    let (tw, th) = (metrics.width as i32, metrics.height as i32);
    let (vertical, horizontal) = align.split();

    let y = match vertical {
        Vertical::Top => rect.y + margin,
        Vertical::Mid => rect.y + h / 2 - th / 2,
        Vertical::Bot => rect.y + h - margin - th,
    };
    let x = match horizontal {
        Horizontal::Left => rect.x + margin,
        Horizontal::Mid => rect.x + w / 2 - tw / 2,
        Horizontal::Right => rect.x + w - margin - tw,
    };

    let x = x - metrics.origin_x;
    let y = y - metrics.origin_y;
    let x = if x <= rect.x { rect.x + 1 } else { x };
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_spellings() {
        assert_eq!("GSLC_ALIGN_BOT_RIGHT".parse::<Align>().unwrap(), Align::BotRight);
        assert_eq!("top-mid".parse::<Align>().unwrap(), Align::TopMid);
        assert_eq!("mid_left".parse::<Align>().unwrap(), Align::MidLeft);
        assert!("centre".parse::<Align>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for align in Align::ALL {
            assert_eq!(align.to_string().parse::<Align>().unwrap(), align);
        }
    }

    #[test]
    fn test_serde_kebab_case() {
        assert_eq!(serde_json::to_string(&Align::BotMid).unwrap(), "\"bot-mid\"");
    }

    #[test]
    fn test_origin_is_subtracted() {
        let metrics = TextMetrics {
            origin_x: 2,
            origin_y: -12,
            width: 20,
            height: 16,
            base_height: Some(12),
        };
        let (x, y) = resolve(Rect::new(10, 10, 100, 40), &metrics, Align::TopLeft, 3);
        assert_eq!((x, y), (11, 25));
    }
}
