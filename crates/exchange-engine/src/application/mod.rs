//! Application layer: the engine service.

pub mod service;
