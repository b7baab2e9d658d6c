pub mod ids;
pub mod node;

pub use ids::{IdAllocator, SequentialIds};
pub use node::{Node, NodeKind, Status};
