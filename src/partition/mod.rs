//! Rank-decomposition geometry: per-face partitioning, face-local rank
//! transforms, and the whole-sphere cube topology built on top of them.

pub mod cube;
pub mod face;
pub mod transform;

pub use cube::{CubeTopology, face_index};
pub use face::{FacePartitioner, SubtileIndex};
