use std::iter::FusedIterator;

use flowgrid_core::{ContentPool, Point};

use crate::board::Board;

/// Iterator over the points visited by following next steps from a node.
///
/// Created by [`Board::path_from`].
pub struct PathIter<'a, P: ContentPool> {
    board: &'a Board<P>,
    cur: Option<usize>,
    remaining: usize,
}

impl<'a, P: ContentPool> PathIter<'a, P> {
    pub(crate) fn new(board: &'a Board<P>, start: Option<usize>) -> Self {
        Self {
            board,
            cur: start,
            remaining: board.nodes.len(),
        }
    }
}

impl<P: ContentPool> Iterator for PathIter<'_, P> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        // Next steps form a forest; the budget bounds the walk regardless.
        if self.remaining == 0 {
            return None;
        }
        let node = &self.board.nodes[self.cur?];
        self.remaining -= 1;
        self.cur = node.next_index();
        Some(node.pos())
    }
}

impl<P: ContentPool> FusedIterator for PathIter<'_, P> {}
