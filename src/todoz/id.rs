//! Item identifiers.
//!
//! An id is the base-36 Unix time in milliseconds, a base-36 per-process
//! sequence number, and 64 random bits (base-36) taken from a v4 UUID. The
//! sequence makes ids unique within one process even inside a single
//! millisecond; the random tail keeps separate processes apart.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use uuid::Uuid;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn generate_id() -> String {
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let random = Uuid::new_v4().as_u64_pair().1;

    format!("{}{}{}", to_base36(millis), to_base36(seq), to_base36(random))
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    buf.into_iter().map(char::from).collect()
}
