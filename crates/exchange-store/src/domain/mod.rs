//! Domain layer: store error taxonomy.

pub mod errors;
