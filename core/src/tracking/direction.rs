use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal screen direction. Also used for the evasion thrust axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Horizontal {
    Left,
    Right,
}

/// Vertical screen direction; image rows grow downward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vertical {
    Up,
    Down,
}

impl Horizontal {
    pub fn opposite(self) -> Self {
        match self {
            Horizontal::Left => Horizontal::Right,
            Horizontal::Right => Horizontal::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Horizontal::Left => "LEFT",
            Horizontal::Right => "RIGHT",
        }
    }
}

impl Vertical {
    pub fn opposite(self) -> Self {
        match self {
            Vertical::Up => Vertical::Down,
            Vertical::Down => Vertical::Up,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Vertical::Up => "UP",
            Vertical::Down => "DOWN",
        }
    }
}

/// Coarse compass heading of the tracked target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectionLabel {
    Stationary,
    Left,
    Right,
    Up,
    Down,
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl DirectionLabel {
    pub fn from_parts(horizontal: Option<Horizontal>, vertical: Option<Vertical>) -> Self {
        use self::Horizontal::*;
        use self::Vertical::*;
        match (horizontal, vertical) {
            (None, None) => DirectionLabel::Stationary,
            (Some(Left), None) => DirectionLabel::Left,
            (Some(Right), None) => DirectionLabel::Right,
            (None, Some(Up)) => DirectionLabel::Up,
            (None, Some(Down)) => DirectionLabel::Down,
            (Some(Left), Some(Up)) => DirectionLabel::LeftUp,
            (Some(Left), Some(Down)) => DirectionLabel::LeftDown,
            (Some(Right), Some(Up)) => DirectionLabel::RightUp,
            (Some(Right), Some(Down)) => DirectionLabel::RightDown,
        }
    }

    pub fn horizontal(self) -> Option<Horizontal> {
        match self {
            DirectionLabel::Left | DirectionLabel::LeftUp | DirectionLabel::LeftDown => {
                Some(Horizontal::Left)
            }
            DirectionLabel::Right | DirectionLabel::RightUp | DirectionLabel::RightDown => {
                Some(Horizontal::Right)
            }
            _ => None,
        }
    }

    pub fn vertical(self) -> Option<Vertical> {
        match self {
            DirectionLabel::Up | DirectionLabel::LeftUp | DirectionLabel::RightUp => {
                Some(Vertical::Up)
            }
            DirectionLabel::Down | DirectionLabel::LeftDown | DirectionLabel::RightDown => {
                Some(Vertical::Down)
            }
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        Self::from_parts(
            self.horizontal().map(Horizontal::opposite),
            self.vertical().map(Vertical::opposite),
        )
    }
}

impl fmt::Display for DirectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.horizontal(), self.vertical()) {
            (None, None) => f.write_str("STATIONARY"),
            (Some(h), None) => f.write_str(h.as_str()),
            (None, Some(v)) => f.write_str(v.as_str()),
            (Some(h), Some(v)) => write!(f, "{} {}", h.as_str(), v.as_str()),
        }
    }
}

/// Quantises a velocity into a [`DirectionLabel`] with a per-axis deadzone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionLabeler {
    threshold: i64,
}

impl DirectionLabeler {
    pub fn new(threshold: i64) -> Self {
        Self { threshold }
    }

    pub fn label(&self, dx: i64, dy: i64) -> DirectionLabel {
        let horizontal = if dx > self.threshold {
            Some(Horizontal::Right)
        } else if dx < -self.threshold {
            Some(Horizontal::Left)
        } else {
            None
        };
        let vertical = if dy > self.threshold {
            Some(Vertical::Down)
        } else if dy < -self.threshold {
            Some(Vertical::Up)
        } else {
            None
        };
        DirectionLabel::from_parts(horizontal, vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadzone_is_exclusive() {
        let labeler = DirectionLabeler::new(2);
        assert_eq!(labeler.label(2, -2), DirectionLabel::Stationary);
        assert_eq!(labeler.label(3, 0), DirectionLabel::Right);
        assert_eq!(labeler.label(0, -3), DirectionLabel::Up);
    }

    #[test]
    fn positive_dy_points_down() {
        let labeler = DirectionLabeler::new(2);
        assert_eq!(labeler.label(-5, 7), DirectionLabel::LeftDown);
        assert_eq!(labeler.label(-5, 7).to_string(), "LEFT DOWN");
    }

    #[test]
    fn horizontal_is_printed_before_vertical() {
        assert_eq!(DirectionLabel::RightUp.to_string(), "RIGHT UP");
        assert_eq!(DirectionLabel::Stationary.to_string(), "STATIONARY");
        assert_eq!(DirectionLabel::Down.to_string(), "DOWN");
    }

    #[test]
    fn negated_velocity_gives_opposite_label() {
        let labeler = DirectionLabeler::new(2);
        for dx in -6..=6 {
            for dy in -6..=6 {
                let forward = labeler.label(dx, dy);
                let backward = labeler.label(-dx, -dy);
                assert_eq!(forward.opposite(), backward, "dx={} dy={}", dx, dy);
                assert_eq!(
                    forward.horizontal().map(Horizontal::opposite),
                    backward.horizontal()
                );
                assert_eq!(
                    forward.vertical().map(Vertical::opposite),
                    backward.vertical()
                );
            }
        }
    }
}
