//! # stylememo
//!
//! Theme-scoped memoization for styleguide component lookups.
//!
//! ## Architecture
//! - **Keys**: canonical lookup string hashed with SHA-256, truncated to 64 bits
//! - **Store**: theme -> (key -> value), AHash maps behind a `parking_lot` lock
//! - **Gate**: runtime enable flag consulted on every store
//! - **Uids**: atomic counter for generated selector names
//!
//! ```
//! use stylememo::{derive_key, StyleMap, ThemeMemoizer};
//!
//! let memo: ThemeMemoizer = ThemeMemoizer::new();
//! let key = derive_key("dark", Some(&["core"][..]), Some("button"), &["large"], Some("hover"));
//!
//! let styles = memo.fetch_or_create("dark", key, || {
//!     let mut styles = StyleMap::new();
//!     styles.insert("color".to_string(), "red".to_string());
//!     styles
//! });
//! assert_eq!(memo.fetch("dark", key), Some(styles));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod key;
mod memoizer;
mod stats;
mod uid;

pub use config::{MemoizeConfig, MemoizeMode};
pub use error::{Error, Result};
pub use key::{derive_key, CacheKey};
pub use memoizer::{StyleMap, ThemeMemoizer};
pub use stats::MemoStats;
pub use uid::{UidGenerator, DEFAULT_NAMESPACE, FIXED_SUFFIX};
