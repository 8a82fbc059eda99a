//! Roundtable CLI library.

pub mod cli;
