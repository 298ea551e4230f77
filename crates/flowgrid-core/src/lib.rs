//! **flowgrid-core** — shared types for flow-field grids.
//!
//! This crate provides the vocabulary used across the *flowgrid* crates:
//! geometry primitives, cardinal directions, cell content tags, the
//! content pooling capability, and board configuration.

pub mod config;
pub mod content;
pub mod geom;

pub use config::{BoardConfig, MIN_SIDE};
pub use content::{ContentPool, ContentType, NullPool};
pub use geom::{Direction, Point, Range};
