//! Cache key derivation
//!
//! Canonical form, every name written as `{byte length}:{name}`:
//! ```text
//! {component}|{modifier count}|{sorted modifiers}|{extension count}|{extensions}|{state}
//! ```
//! e.g. `3:btn|2|7:primary5:small|1|4:core|5:hover`. Length prefixes keep
//! the form unambiguous whatever characters the names contain, and
//! modifiers never run into extensions.
//!
//! The key is the first 8 bytes (big-endian) of the SHA-256 digest of the
//! canonical form, so keys are stable across processes and platforms.

use std::fmt;

use sha2::{Digest, Sha256};

/// Separator between canonical form sections
const SECTION_SEP: char = '|';

/// Derived key for a memoized styleguide lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(u64);

impl CacheKey {
    /// Build a key from a raw value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw 64-bit value
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    fn from_canonical(canonical: &str) -> Self {
        let digest = Sha256::digest(canonical.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        Self(u64::from_be_bytes(bytes))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Derive the cache key for a styleguide lookup
///
/// # Arguments
/// * `theme` - Theme name (isolation comes from the theme namespace, it is
///   not part of the canonical form)
/// * `extensions` - Active extensions, in caller order
/// * `component` - Component identifier
/// * `modifiers` - Modifiers, in any order
/// * `state` - Interaction state
///
/// # Returns
/// * `None` when `extensions` or `component` is absent; such lookups are
///   not cacheable
pub fn derive_key(
    _theme: &str,
    extensions: Option<&[&str]>,
    component: Option<&str>,
    modifiers: &[&str],
    state: Option<&str>,
) -> Option<CacheKey> {
    let canonical = canonical_form(extensions?, component?, modifiers, state);
    Some(CacheKey::from_canonical(&canonical))
}

pub(crate) fn canonical_form(
    extensions: &[&str],
    component: &str,
    modifiers: &[&str],
    state: Option<&str>,
) -> String {
    let mut sorted: Vec<&str> = modifiers.to_vec();
    sorted.sort_unstable();

    let mut canonical = String::with_capacity(component.len() + 64);
    push_name(&mut canonical, component);
    canonical.push(SECTION_SEP);
    push_list(&mut canonical, &sorted);
    canonical.push(SECTION_SEP);
    push_list(&mut canonical, extensions);
    canonical.push(SECTION_SEP);
    push_name(&mut canonical, state.unwrap_or_default());
    canonical
}

fn push_name(canonical: &mut String, name: &str) {
    canonical.push_str(&name.len().to_string());
    canonical.push(':');
    canonical.push_str(name);
}

fn push_list(canonical: &mut String, names: &[&str]) {
    canonical.push_str(&names.len().to_string());
    canonical.push(SECTION_SEP);
    for name in names {
        push_name(canonical, name);
    }
}
