//! # daylabel-core
//!
//! Date divider labels for chat lists.
//!
//! This library provides:
//! - [`DateLabeler`], mapping a message timestamp and "now" to a divider label
//!   ("Today", "Yesterday", "3 days ago", "June 12, 2025")
//! - Grouping of chronological items into labeled day [`Section`]s
//! - Calendar [`Zone`] selection and timestamp parsing
//! - Configuration and logging infrastructure
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use daylabel_core::DateLabeler;
//!
//! let labeler = DateLabeler::default();
//! let now = Utc.with_ymd_and_hms(2025, 6, 19, 10, 0, 0).unwrap();
//! let sent = Utc.with_ymd_and_hms(2025, 6, 1, 18, 30, 0).unwrap();
//!
//! assert_eq!(labeler.label_at(Some(&now), &now), "Today");
//! assert_eq!(labeler.label_at(Some(&sent), &now), "June 1, 2025");
//! ```

// Re-export commonly used items at the crate root
pub use config::{Config, LabelConfig};
pub use error::{Error, Result};
pub use format::{format_day_label, DateLabeler};
pub use instant::parse_instant;
pub use sections::Section;
pub use zone::Zone;

// Public modules
pub mod config;
pub mod error;
pub mod format;
pub mod instant;
pub mod logging;
pub mod sections;
pub mod zone;
