//! Report rendering module

pub mod formatter;
