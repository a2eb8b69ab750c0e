// Port Layer - Interfaces for external dependencies

pub mod random_source; // For deterministic testing
pub mod time_provider;

// Re-exports
pub use random_source::{FixedRandomSource, RandomSource, ThreadRandomSource};
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
