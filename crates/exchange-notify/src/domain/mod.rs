//! Domain layer: message entities and error taxonomy.

pub mod entities;
pub mod errors;
