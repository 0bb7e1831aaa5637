//! Pure pairing algorithms: unbiased shuffle and ring construction.

pub mod ring;
pub mod shuffle;

pub use ring::build_gift_ring;
pub use shuffle::fisher_yates;
