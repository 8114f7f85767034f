//! Stone colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of a game. Black always moves first.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color` for O(1) access.
//! Used for capture tallies, last moves, and anything else kept per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors in turn order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Get the other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Slot index (Black = 0, White = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use go_rules::core::{Color, ColorMap};
///
/// let mut captures: ColorMap<u32> = ColorMap::with_value(0);
/// captures[Color::White] += 3;
///
/// assert_eq!(captures[Color::Black], 0);
/// assert_eq!(captures[Color::White], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Black), factory(Color::White)],
        }
    }

    /// Create a ColorMap from explicit black and white values.
    pub fn from_pair(black: T, white: T) -> Self {
        Self {
            data: [black, white],
        }
    }

    /// Create a new ColorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs, Black first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(format!("{}", Color::Black), "Black");
    }

    #[test]
    fn test_color_map_new() {
        let map: ColorMap<usize> = ColorMap::new(|c| c.index() * 10);

        assert_eq!(map[Color::Black], 0);
        assert_eq!(map[Color::White], 10);
    }

    #[test]
    fn test_color_map_mutation() {
        let mut map: ColorMap<i32> = ColorMap::with_value(0);

        map[Color::Black] = 4;
        *map.get_mut(Color::White) += 2;

        assert_eq!(map[Color::Black], 4);
        assert_eq!(map[Color::White], 2);
    }

    #[test]
    fn test_color_map_iter() {
        let map: ColorMap<i32> = ColorMap::new(|c| c.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Color::Black, &0), (Color::White, &1)]);
    }

    #[test]
    fn test_color_map_serialization() {
        let map: ColorMap<u32> = ColorMap::new(|c| c.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: ColorMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
