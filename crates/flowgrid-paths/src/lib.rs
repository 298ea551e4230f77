//! Flow fields over a fixed grid of nodes.
//!
//! A [`Board`] holds one [`Node`] per cell. Some nodes are destinations,
//! some are walls, and every node always knows its distance to the nearest
//! reachable destination and which neighbor to step to next:
//!
//! - **Propagation** is a multi-source breadth-first search seeded from all
//!   destinations. Nodes on alternating checkerboard squares try their
//!   neighbors in reverse order, which varies the direction ties resolve
//!   to without changing any distance.
//! - **Edits** ([`Board::toggle_wall`], [`Board::toggle_destination`]) are
//!   validated: an edit that would strand a node or remove the last
//!   destination is rolled back and the previous field recomputed.
//!
//! Content changes are reported to a host-provided
//! [`ContentPool`](flowgrid_core::ContentPool) so renderers can recycle the
//! visual instances backing each cell.

mod board;
mod flow;
mod node;
mod path;

pub use board::{Board, BoardError, Toggle};
pub use node::Node;
pub use path::PathIter;
