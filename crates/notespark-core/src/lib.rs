//! Notespark Core Library
//!
//! Keyword indexing of a note vault, structural note distance, and
//! selection of dissimilar note pairs for idea generation.

pub mod config;
pub mod distance;
pub mod error;
pub mod index;
pub mod keywords;
pub mod logging;
pub mod mapping;
pub mod note;
pub mod picker;
pub mod trends;
pub mod vault;
