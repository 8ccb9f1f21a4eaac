//! Core of the dollar game: random planar-looking graph generation and the
//! chip-firing money model.
//!
//! Main components:
//! - [`geometry`] — distances and the angle test between edges.
//! - [`union_find`] — disjoint sets used to build the spanning tree.
//! - [`placement`] — rejection sampling of spaced-out points.
//! - [`graph`] — nodes, edges and the graph that owns them.
//! - [`money`] — balances and the redistribution move.
//! - [`phases`] — the generation pipeline.
//! - [`game`] — controller tying configuration, generation and moves together.
//! - [`config`] — tunable parameters and input clamping.
//! - [`error`] — error type for id-addressed operations.
//! - [`types`] — shared id aliases.

pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod graph;
pub mod money;
pub mod phases;
pub mod placement;
pub mod types;
pub mod union_find;
