//! Configuration sources, in increasing precedence: global file, explicit file, environment.

pub mod environment;
pub mod global_file;
