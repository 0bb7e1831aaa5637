//! Ports: the outbound provider contract.

pub mod outbound;
