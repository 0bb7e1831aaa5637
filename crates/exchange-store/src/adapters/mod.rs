//! Adapters: store implementations.

pub mod memory;
