pub mod check;
pub mod common;
pub mod move_card;
pub mod show;
pub mod tree;
