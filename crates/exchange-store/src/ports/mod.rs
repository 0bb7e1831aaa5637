//! Ports: the store's inbound API.

pub mod inbound;
