//! CPU-side mesh data and geometry operations.
//!
//! This module provides the GPU-agnostic mesh representation:
//!
//! - [`Mesh`] - deduplicated vertex attribute buffers plus triangle index
//!   buffers, ready for upload
//! - [`MeshError`] - failures of geometry operations and buffer mutation
//!
//! Geometry derivation (normals, tangents, bounds, scaling) lives in
//! `geometry.rs` as further `impl Mesh` blocks.

mod data;
mod error;
mod geometry;

pub use data::Mesh;
pub use error::MeshError;
