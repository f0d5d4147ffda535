//! camtools - tool library and NC program utilities for a CAM workflow
//!
//! Two independent batch jobs share this crate: the tool renamer, which
//! normalizes tool descriptions in a tool-library export, and the NC scanner,
//! which finds program files containing a given feed-rate word.

pub mod config;
pub mod error;
pub mod library;
pub mod naming;
pub mod renamer;
pub mod scanner;

pub use error::{CamError, Result};
