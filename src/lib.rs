pub mod board;
pub mod commands;
pub mod models;
pub mod snapshot;
pub mod tree;
