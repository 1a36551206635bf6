//! In-memory implementations of the registry.

pub mod registry;

pub use registry::InMemoryDepositRegistry;
