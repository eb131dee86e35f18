//! # Link-Sync Test Suite
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # wire parameters → service → host collaborators
//!     ├── concurrency.rs  # simultaneous handshakes sharing one clock
//!     └── properties.rs   # randomized checks of the accept/warn/reject rules
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p link-tests
//! cargo test -p link-tests integration::properties::
//! ```

pub mod integration;
