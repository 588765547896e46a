//! Filesystem access for snapshot building
//!
//! Walking a directory tree, normalizing the names found in it, and hashing
//! file contents.

pub mod hasher;
pub mod path;
pub mod walker;
