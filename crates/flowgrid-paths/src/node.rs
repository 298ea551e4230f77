use flowgrid_core::{ContentPool, ContentType, Direction, Point};

/// Sentinel distance of a node not reached by the last propagation.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Expansion order for nodes on odd checkerboard squares.
const ALTERNATIVE_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// Expansion order for the remaining nodes.
const REGULAR_ORDER: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::South,
    Direction::North,
];

/// A single board cell.
///
/// Neighbor links and the next step are indices into the board's node
/// arena. Links are set once while the board is built; distance and next
/// step are rewritten by every propagation.
#[derive(Clone, Debug)]
pub struct Node {
    pos: Point,
    neighbors: [Option<usize>; 4],
    content: Option<ContentType>,
    alternative: bool,
    distance: i32,
    next: Option<usize>,
}

impl Node {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            neighbors: [None; 4],
            content: None,
            alternative: pos.is_odd(),
            distance: UNREACHABLE,
            next: None,
        }
    }

    /// Link `nodes[from]` to `nodes[to]` in direction `dir`, and back.
    pub(crate) fn link(nodes: &mut [Node], from: usize, dir: Direction, to: usize) {
        debug_assert!(
            nodes[from].neighbors[dir.index()].is_none()
                && nodes[to].neighbors[dir.opposite().index()].is_none(),
            "redefined neighbors between {} and {}",
            nodes[from].pos,
            nodes[to].pos
        );
        nodes[from].neighbors[dir.index()] = Some(to);
        nodes[to].neighbors[dir.opposite().index()] = Some(from);
    }

    /// Grid coordinate of this node.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Current content. Nodes whose content was never installed read as empty.
    #[inline]
    pub fn content(&self) -> ContentType {
        self.content.unwrap_or_default()
    }

    /// Replace the content, handing the previous one back to `pool` first.
    pub(crate) fn set_content<P: ContentPool>(&mut self, kind: ContentType, pool: &mut P) {
        if let Some(old) = self.content.take() {
            pool.release(old, self.pos);
        }
        pool.acquire(kind, self.pos);
        self.content = Some(kind);
    }

    /// Checkerboard flag selecting the expansion order.
    #[inline]
    pub fn is_alternative(&self) -> bool {
        self.alternative
    }

    /// Hops to the nearest destination, or `None` if unreached.
    #[inline]
    pub fn distance(&self) -> Option<i32> {
        self.has_path().then_some(self.distance)
    }

    /// Whether the last propagation reached this node.
    #[inline]
    pub fn has_path(&self) -> bool {
        self.distance != UNREACHABLE
    }

    /// Coordinate of the adjacent node in direction `dir`, if any.
    #[inline]
    pub fn neighbor(&self, dir: Direction) -> Option<Point> {
        self.neighbors[dir.index()].map(|_| self.pos.step(dir))
    }

    /// Direction of the neighbor one hop closer to a destination.
    pub fn next_step_direction(&self) -> Option<Direction> {
        let next = self.next?;
        Direction::ALL
            .into_iter()
            .find(|d| self.neighbors[d.index()] == Some(next))
    }

    /// Coordinate of the neighbor one hop closer to a destination.
    #[inline]
    pub fn next_step(&self) -> Option<Point> {
        self.next_step_direction().map(|d| self.pos.step(d))
    }

    #[inline]
    pub(crate) fn next_index(&self) -> Option<usize> {
        self.next
    }

    pub(crate) fn clear_path(&mut self) {
        self.distance = UNREACHABLE;
        self.next = None;
    }

    pub(crate) fn become_destination(&mut self) {
        self.distance = 0;
        self.next = None;
    }

    /// Order in which this node tries to grow into its neighbors.
    #[inline]
    pub(crate) fn expansion_order(&self) -> [Direction; 4] {
        if self.alternative {
            ALTERNATIVE_ORDER
        } else {
            REGULAR_ORDER
        }
    }

    /// Extend the path of `nodes[from]` one step in direction `dir`.
    ///
    /// A neighbor that is missing or already reached is left alone. Otherwise
    /// it gets the next distance and points back at `from`; its index is
    /// returned for further expansion unless it is a wall.
    pub(crate) fn grow_path_to(nodes: &mut [Node], from: usize, dir: Direction) -> Option<usize> {
        let node = &nodes[from];
        debug_assert!(node.has_path(), "growing from unreached node {}", node.pos);
        let ni = node.neighbors[dir.index()]?;
        let distance = node.distance + 1;

        let neighbor = &mut nodes[ni];
        if neighbor.has_path() {
            return None;
        }
        neighbor.distance = distance;
        neighbor.next = Some(from);

        neighbor.content().is_passable().then_some(ni)
    }
}
