pub mod collections;
pub mod sort;

// Re-export all modules
pub use collections::*;
pub use sort::*;
