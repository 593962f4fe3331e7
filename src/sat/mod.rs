pub mod clause;
pub mod config;
pub mod dimacs;
pub mod error;
pub mod formula;
pub mod lit;
