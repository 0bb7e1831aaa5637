//! Cross-subsystem integration flows.

pub mod fixtures;

mod end_to_end;
mod randomness;
mod secrecy;
