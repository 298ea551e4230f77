//! The board: a fixed node arena kept in a solved state across edits.

use std::collections::VecDeque;
use std::fmt;

use flowgrid_core::{
    BoardConfig, ContentPool, ContentType, Direction, MIN_SIDE, NullPool, Point, Range,
};

use crate::node::Node;
use crate::path::PathIter;

/// Outcome of a wall or destination toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Toggle {
    /// The content changed and the flow field was recomputed.
    Applied,
    /// The edit would have stranded a node or removed the last destination,
    /// so it was rolled back.
    Rejected,
    /// Nothing to do: the node is out of bounds or holds the other kind of
    /// content.
    Ignored,
}

/// Errors that can occur when building a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// One of the sides is shorter than [`MIN_SIDE`].
    TooSmall { width: i32, height: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { width, height } => write!(
                f,
                "board: size {width}x{height} is too small (each side must be at least {MIN_SIDE})"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// A rectangular board of nodes carrying a flow field towards the nearest
/// destination.
///
/// Every node is created once with its neighbor links and lives as long as
/// the board. Content edits go through [`toggle_wall`](Self::toggle_wall)
/// and [`toggle_destination`](Self::toggle_destination), which keep every
/// node connected to some destination or undo themselves.
pub struct Board<P: ContentPool = NullPool> {
    pub(crate) range: Range,
    pub(crate) nodes: Vec<Node>,
    pub(crate) frontier: VecDeque<usize>,
    pool: P,
    show_paths: bool,
    paths_on_walls: bool,
}

impl Board {
    /// Create a `width` × `height` board with default display settings and
    /// no content pool.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        Self::from_config(&BoardConfig::with_size(width, height), NullPool)
    }
}

impl<P: ContentPool> Board<P> {
    /// Build the board described by `config`, backing content with `pool`.
    ///
    /// All nodes start empty, then the node at the middle of the row-major
    /// order becomes the first destination.
    pub fn from_config(config: &BoardConfig, pool: P) -> Result<Self, BoardError> {
        if config.width < MIN_SIDE || config.height < MIN_SIDE {
            return Err(BoardError::TooSmall {
                width: config.width,
                height: config.height,
            });
        }

        let range = Range::sized(config.width, config.height);
        let width = config.width as usize;
        let mut nodes: Vec<Node> = range.iter().map(Node::new).collect();
        for (i, p) in range.iter().enumerate() {
            if p.x > 0 {
                Node::link(&mut nodes, i, Direction::West, i - 1);
            }
            if p.y > 0 {
                Node::link(&mut nodes, i, Direction::North, i - width);
            }
        }

        let mut board = Self {
            range,
            frontier: VecDeque::with_capacity(nodes.len()),
            nodes,
            pool,
            show_paths: config.show_paths,
            paths_on_walls: config.paths_on_walls,
        };
        for i in 0..board.nodes.len() {
            board.set_content(i, ContentType::Empty);
        }

        let center = board.range.point_at(board.nodes.len() / 2);
        let placed = board.toggle_destination(center);
        debug_assert_eq!(placed, Toggle::Applied);
        Ok(board)
    }

    /// The board rectangle, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Board size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.range.size()
    }

    /// Look up the node at `p`. Returns `None` outside the board.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Node> {
        self.range.index_of(p).map(|i| &self.nodes[i])
    }

    /// Iterate over `(Point, &Node)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Node)> + '_ {
        self.nodes.iter().map(|n| (n.pos(), n))
    }

    /// Number of nodes holding `kind`.
    pub fn count(&self, kind: ContentType) -> usize {
        self.nodes.iter().filter(|n| n.content() == kind).count()
    }

    /// Whether every node was reached by the last propagation.
    pub fn is_solved(&self) -> bool {
        self.nodes.iter().all(Node::has_path)
    }

    /// The content pool backing this board.
    #[inline]
    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// Follow next steps from `p` down to a destination.
    ///
    /// The iterator yields `p` itself first and the destination last. It is
    /// empty when `p` is outside the board.
    pub fn path_from(&self, p: Point) -> PathIter<'_, P> {
        PathIter::new(self, self.range.index_of(p))
    }

    /// Toggle `p` between empty and destination.
    ///
    /// Adding a destination always succeeds. Removing one is undone if it
    /// was the last destination or if some node loses its path. Walls are
    /// left alone.
    pub fn toggle_destination(&mut self, p: Point) -> Toggle {
        let Some(i) = self.range.index_of(p) else {
            return Toggle::Ignored;
        };
        match self.nodes[i].content() {
            ContentType::Destination => {
                self.try_set(i, ContentType::Empty, ContentType::Destination)
            }
            ContentType::Empty => {
                self.set_content(i, ContentType::Destination);
                self.find_paths();
                Toggle::Applied
            }
            ContentType::Wall => Toggle::Ignored,
        }
    }

    /// Toggle `p` between empty and wall.
    ///
    /// Removing a wall always succeeds. Placing one is undone if some node
    /// loses its path. Destinations are left alone.
    pub fn toggle_wall(&mut self, p: Point) -> Toggle {
        let Some(i) = self.range.index_of(p) else {
            return Toggle::Ignored;
        };
        match self.nodes[i].content() {
            ContentType::Wall => {
                self.set_content(i, ContentType::Empty);
                self.find_paths();
                Toggle::Applied
            }
            ContentType::Empty => self.try_set(i, ContentType::Wall, ContentType::Empty),
            ContentType::Destination => Toggle::Ignored,
        }
    }

    /// Whether renderers should draw next-step arrows.
    #[inline]
    pub fn show_paths(&self) -> bool {
        self.show_paths
    }

    /// Turn next-step arrows on or off. Path state is unaffected.
    pub fn set_show_paths(&mut self, show: bool) {
        self.show_paths = show;
    }

    /// Whether walls get arrows when paths are shown.
    #[inline]
    pub fn paths_on_walls(&self) -> bool {
        self.paths_on_walls
    }

    /// Choose whether walls get arrows when paths are shown.
    pub fn set_paths_on_walls(&mut self, show: bool) {
        self.paths_on_walls = show;
    }

    /// The arrow a renderer should draw at `p`, if any.
    ///
    /// Nothing is drawn while paths are hidden, on destinations, or on walls
    /// unless [`paths_on_walls`](Self::paths_on_walls) is set.
    pub fn path_indicator(&self, p: Point) -> Option<Direction> {
        if !self.show_paths {
            return None;
        }
        let node = self.at(p)?;
        match node.content() {
            ContentType::Destination => None,
            ContentType::Wall if !self.paths_on_walls => None,
            _ => node.next_step_direction(),
        }
    }

    /// Install `tentative` at `i` and keep it only if the board stays solved;
    /// otherwise put `previous` back.
    fn try_set(&mut self, i: usize, tentative: ContentType, previous: ContentType) -> Toggle {
        self.set_content(i, tentative);
        if self.find_paths() {
            return Toggle::Applied;
        }

        log::debug!(
            "rejected {:?} at {}: the board would lose a path",
            tentative,
            self.nodes[i].pos()
        );
        self.set_content(i, previous);
        let restored = self.find_paths();
        debug_assert!(restored, "rollback left the board unsolved");
        Toggle::Rejected
    }

    fn set_content(&mut self, i: usize, kind: ContentType) {
        self.nodes[i].set_content(kind, &mut self.pool);
    }
}

impl<P: ContentPool> fmt::Debug for Board<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("range", &self.range)
            .field("destinations", &self.count(ContentType::Destination))
            .field("walls", &self.count(ContentType::Wall))
            .field("show_paths", &self.show_paths)
            .finish_non_exhaustive()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn toggle_round_trip() {
        for t in [Toggle::Applied, Toggle::Rejected, Toggle::Ignored] {
            let json = serde_json::to_string(&t).unwrap();
            let back: Toggle = serde_json::from_str(&json).unwrap();
            assert_eq!(t, back);
        }
    }
}
