//! Word ladders: every path between two words of a dictionary where each step
//! changes exactly one letter, shortest paths first.

pub mod app;
pub mod dictionary;
pub mod graph;
pub mod path;
