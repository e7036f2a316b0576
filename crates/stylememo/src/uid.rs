//! Unique identifier generation for generated selectors

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use rand::Rng;

/// Default namespace embedded in generated identifiers
pub const DEFAULT_NAMESPACE: &str = "archetype";

/// Fixed suffix used by deterministic generators
pub const FIXED_SUFFIX: &str = "RANDOM_UID";

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random base-36 segment
const RANDOM_LEN: usize = 8;

/// Generates process-unique identifiers
///
/// ```text
/// unique("class") -> .archetype-uid-1700000000-k3j9x0ab-1
/// unique("id")    -> #archetype-uid-1700000000-0f7qzz12-2
/// ```
#[derive(Debug)]
pub struct UidGenerator {
    counter: AtomicU64,
    namespace: String,
    deterministic: bool,
}

impl UidGenerator {
    /// Create a generator using the default namespace
    pub fn new() -> Self {
        Self::with_namespace(DEFAULT_NAMESPACE)
    }

    /// Create a generator with a custom namespace
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            counter: AtomicU64::new(0),
            namespace: namespace.into(),
            deterministic: false,
        }
    }

    /// Generator whose identifiers end in a fixed suffix, for reproducible
    /// output in tests
    pub fn deterministic(mut self) -> Self {
        self.deterministic = true;
        self
    }

    /// Next counter value, starting at 1
    pub fn next_uid(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Generate a unique identifier
    ///
    /// # Arguments
    /// * `prefix` - `"class"` yields a class selector, `"id"` an id selector,
    ///   anything else is prepended verbatim
    pub fn unique(&self, prefix: &str) -> String {
        let prefix = match prefix {
            "class" => ".",
            "id" => "#",
            other => other,
        };
        let suffix = if self.deterministic {
            FIXED_SUFFIX.to_string()
        } else {
            format!(
                "{}-{}-{}",
                Utc::now().timestamp(),
                random_base36(RANDOM_LEN),
                self.next_uid()
            )
        };
        format!("{}{}-uid-{}", prefix, self.namespace, suffix)
    }
}

impl Default for UidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}
