mod buffer;
pub mod dynamic_array;
pub mod queue;
pub mod stack;

pub use dynamic_array::{DynamicArray, DEFAULT_CAPACITY};
pub use queue::Queue;
pub use stack::Stack;
