//! Synthesis of node ids and keys for records created inside the editor or
//! loaded without an identity.

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Synthesize a collision-resistant node id: a random base-36 suffix plus a
/// base-36 millisecond timestamp. Only documents authored outside the editor
/// ever take this path; an id, once assigned, is never regenerated.
pub fn node_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..9)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("node_{}_{}", suffix, to_base36(timestamp_millis()))
}

/// Derive a document-unique node key from an action name: lowercased,
/// whitespace collapsed to underscores, suffixed with the millisecond
/// timestamp. `taken` reports whether a candidate key is already in use; a
/// numeric counter is appended until the key is free, so two adds within the
/// same millisecond still get distinct keys.
pub fn node_key(action: &str, taken: impl Fn(&str) -> bool) -> String {
    let slug = action
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    let candidate = format!("{}_{}", slug, timestamp_millis());
    if !taken(&candidate) {
        return candidate;
    }
    let mut counter = 2u64;
    loop {
        let next = format!("{}_{}", candidate, counter);
        if !taken(&next) {
            return next;
        }
        counter += 1;
    }
}

fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
