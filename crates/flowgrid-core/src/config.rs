//! Board configuration.

use crate::geom::Point;

/// Smallest allowed board edge, in cells.
pub const MIN_SIDE: i32 = 2;

/// Settings used to build a board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    /// Whether renderers should surface next-step arrows.
    pub show_paths: bool,
    /// Whether walls get an arrow too. Walls are reached by propagation but
    /// never continue it, so their next step is only a record of who got
    /// there first.
    pub paths_on_walls: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 11,
            height: 11,
            show_paths: true,
            paths_on_walls: false,
        }
    }
}

impl BoardConfig {
    /// Config with the given size and default display settings.
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Board size as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Copy of this config with both sides clamped to at least [`MIN_SIDE`].
    pub fn validated(&self) -> Self {
        Self {
            width: self.width.max(MIN_SIDE),
            height: self.height.max(MIN_SIDE),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_clamps_small_sides() {
        let cfg = BoardConfig::with_size(0, 7).validated();
        assert_eq!(cfg.size(), Point::new(2, 7));
        let cfg = BoardConfig::with_size(-4, 1).validated();
        assert_eq!(cfg.size(), Point::new(2, 2));
    }

    #[test]
    fn validated_keeps_display_flags() {
        let cfg = BoardConfig {
            width: 1,
            height: 1,
            show_paths: false,
            paths_on_walls: true,
        }
        .validated();
        assert!(!cfg.show_paths);
        assert!(cfg.paths_on_walls);
    }
}
