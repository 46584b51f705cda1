//! CLI commands for notespark

pub mod dispatch;
pub mod distance;
pub mod format;
pub mod index;
pub mod matching;
pub mod pick;
