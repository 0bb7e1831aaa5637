//! Ports: the engine's inbound API.

pub mod inbound;
