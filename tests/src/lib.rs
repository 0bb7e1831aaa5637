//! # Gift-Circle Test Suite
//!
//! Unified test crate containing:
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-subsystem flows
//!     ├── end_to_end.rs # Full submission-to-notification runs
//!     ├── randomness.rs # Shuffle distribution quality
//!     └── secrecy.rs    # Nobody learns another pairing
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p exchange-tests
//!
//! # By category
//! cargo test -p exchange-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
