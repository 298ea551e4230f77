//! Multi-destination breadth-first propagation of the flow field.

use flowgrid_core::{ContentPool, ContentType};

use crate::board::Board;
use crate::node::Node;

impl<P: ContentPool> Board<P> {
    /// Recompute distance and next step for every node.
    ///
    /// Destinations seed the frontier at distance 0; every other node starts
    /// unreached. Nodes are expanded in FIFO order, each trying its neighbors
    /// in the order given by its checkerboard flag, so the first node to
    /// reach a neighbor becomes its next step. Walls are reached but never
    /// expanded.
    ///
    /// Returns `false` if there are no destinations or some node stayed
    /// unreached. Partial results are left in place for the caller to
    /// overwrite.
    pub(crate) fn find_paths(&mut self) -> bool {
        let mut frontier = std::mem::take(&mut self.frontier);
        frontier.clear();

        for (i, node) in self.nodes.iter_mut().enumerate() {
            if node.content() == ContentType::Destination {
                node.become_destination();
                frontier.push_back(i);
            } else {
                node.clear_path();
            }
        }

        if frontier.is_empty() {
            self.frontier = frontier;
            return false;
        }
        let seeds = frontier.len();

        let mut expanded = 0usize;
        while let Some(ci) = frontier.pop_front() {
            expanded += 1;
            for dir in self.nodes[ci].expansion_order() {
                if let Some(ni) = Node::grow_path_to(&mut self.nodes, ci, dir) {
                    frontier.push_back(ni);
                }
            }
        }
        self.frontier = frontier;

        let unreached = self.nodes.iter().filter(|n| !n.has_path()).count();
        log::trace!(
            "flow field: {} seeds, {} expanded, {} unreached",
            seeds,
            expanded,
            unreached
        );
        unreached == 0
    }
}

#[cfg(test)]
mod tests {
    use flowgrid_core::{ContentType, NullPool, Point};

    use crate::board::{Board, Toggle};

    #[test]
    fn no_destinations_fails_immediately() {
        let mut board = Board::new(3, 3).unwrap();
        board.nodes[4].set_content(ContentType::Empty, &mut NullPool);
        assert!(!board.find_paths());
        assert!(board.iter().all(|(_, n)| !n.has_path()));

        board.nodes[4].set_content(ContentType::Destination, &mut NullPool);
        assert!(board.find_paths());
        assert_eq!(board.at(Point::new(1, 1)).unwrap().distance(), Some(0));
    }

    #[test]
    fn unreachable_pocket_fails_but_keeps_partial_field() {
        // 3x2 starts with its destination at (0, 1).
        let mut board = Board::new(3, 2).unwrap();
        assert_eq!(board.toggle_wall(Point::new(1, 0)), Toggle::Applied);
        assert_eq!(board.toggle_wall(Point::new(2, 1)), Toggle::Rejected);

        board.nodes[5].set_content(ContentType::Wall, &mut NullPool);
        assert!(!board.find_paths());
        assert!(!board.at(Point::new(2, 0)).unwrap().has_path());
        assert_eq!(board.at(Point::new(1, 0)).unwrap().distance(), Some(2));
        assert_eq!(board.at(Point::new(2, 1)).unwrap().distance(), Some(2));
    }

    #[test]
    fn frontier_is_reused() {
        let mut board = Board::new(6, 6).unwrap();
        let cap = board.frontier.capacity();
        for _ in 0..5 {
            assert!(board.find_paths());
            assert!(board.frontier.is_empty());
        }
        assert_eq!(board.frontier.capacity(), cap);
    }

    #[test]
    fn multiple_destinations_split_the_field() {
        // 7x2 starts with its destination at (0, 1).
        let mut board = Board::new(7, 2).unwrap();
        assert_eq!(board.toggle_destination(Point::new(6, 0)), Toggle::Applied);
        let at = |x, y| board.at(Point::new(x, y)).unwrap();
        assert_eq!(at(5, 0).next_step(), Some(Point::new(6, 0)));
        assert_eq!(at(1, 1).next_step(), Some(Point::new(0, 1)));
        assert_eq!(at(3, 0).distance(), Some(3));
        assert_eq!(at(2, 1).distance(), Some(2));
    }
}
