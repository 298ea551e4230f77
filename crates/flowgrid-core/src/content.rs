//! Cell content tags and the pooling capability hosts use to back them with
//! visual instances.

use crate::geom::Point;

/// What occupies a board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentType {
    #[default]
    Empty,
    Destination,
    Wall,
}

impl ContentType {
    /// Whether paths may continue through a cell with this content.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Source and sink of content instances, owned by the host.
///
/// The board only tracks [`ContentType`] tags. Whenever a cell's content
/// changes, the previous instance is handed back through
/// [`release`](Self::release) before a new one is requested through
/// [`acquire`](Self::acquire).
pub trait ContentPool {
    /// Provide an instance of `kind` placed at `at`.
    fn acquire(&mut self, kind: ContentType, at: Point);

    /// Take back the instance of `kind` previously placed at `at`.
    fn release(&mut self, kind: ContentType, at: Point);
}

/// A pool that backs content with nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullPool;

impl ContentPool for NullPool {
    fn acquire(&mut self, _kind: ContentType, _at: Point) {}

    fn release(&mut self, _kind: ContentType, _at: Point) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_walls_block() {
        assert!(ContentType::Empty.is_passable());
        assert!(ContentType::Destination.is_passable());
        assert!(!ContentType::Wall.is_passable());
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(ContentType::default(), ContentType::Empty);
    }
}
