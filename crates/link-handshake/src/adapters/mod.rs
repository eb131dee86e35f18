//! # Adapters
//!
//! - `SystemClock` / `CachedClock` - Clock sources
//! - `TracingNotifier` / `TracingLinkLog` - Notice and log sinks over `tracing`
//! - `StaticConfigProvider` / `TomlConfigProvider` - Configuration

mod clock;
mod config;
mod logging;

pub use clock::{CachedClock, SystemClock};
#[cfg(feature = "config-file")]
pub use config::TomlConfigProvider;
pub use config::StaticConfigProvider;
pub use logging::{TracingLinkLog, TracingNotifier};
