//! SQLite inspection for Litescope
//!
//! The [`Inspector`] owns at most one open database connection and answers
//! the four questions the UI asks: which tables exist, what columns a table
//! has, what its rows contain, and what one cell holds in full.

mod inspector;

pub use inspector::*;
