//! Command implementations for the storymark CLI
//!
//! Each command loads its input through [`crate::input`] and delegates the
//! actual work to storymark-markup.

pub mod check;
pub mod parse;
pub mod plain;
pub mod refs;
