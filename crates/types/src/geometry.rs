use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Length of the rectangle along the main axis of `direction`.
    pub fn main_len(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Right => self.width,
            Direction::Down => self.height,
        }
    }

    /// Length of the rectangle along the cross axis of `direction`.
    pub fn cross_len(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Right => self.height,
            Direction::Down => self.width,
        }
    }

    /// Returns true if `other` lies within `self`, allowing a small float slack.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        const EPSILON: f32 = 0.01;
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.x + other.width <= self.x + self.width + EPSILON
            && other.y + other.height <= self.y + self.height + EPSILON
    }
}

/// The axis along which a container lays out its items.
///
/// Coordinates use a bottom-left origin: `Right` walks from the left edge towards
/// increasing `x`, `Down` stacks items from the top edge towards decreasing `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    #[default]
    Right,
    Down,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// Container padding expressed relative to the container's direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    pub start_main: f32,
    pub end_main: f32,
    pub start_cross: f32,
    pub end_cross: f32,
}

impl Padding {
    pub fn new(start_main: f32, end_main: f32, start_cross: f32, end_cross: f32) -> Self {
        Self {
            start_main,
            end_main,
            start_cross,
            end_cross,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn zero() -> Self {
        Self::all(0.0)
    }

    pub fn main(start: f32, end: f32) -> Self {
        Self::new(start, end, 0.0, 0.0)
    }

    pub fn cross(start: f32, end: f32) -> Self {
        Self::new(0.0, 0.0, start, end)
    }

    pub fn main_total(&self) -> f32 {
        self.start_main + self.end_main
    }

    pub fn cross_total(&self) -> f32 {
        self.start_cross + self.end_cross
    }
}
