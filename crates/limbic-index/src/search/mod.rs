//! Traversal machinery: the bounded candidate heap and the pruning
//! descent over the arena.

pub mod heap;
pub mod traversal;

pub use heap::{CandidateHeap, Hit};
pub use traversal::{traverse, VisitPolicy};
