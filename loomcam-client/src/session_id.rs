/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Session identifiers name a monitor endpoint in the signaling system.
//!
//! They are generated on the monitor side and typed by hand on the phone, so
//! they have to stay short.  Collision avoidance is probabilistic only; an
//! identifier lives for exactly one page session and is never persisted.

use crate::constants::{SESSION_ID_PREFIX, SESSION_ID_SPAN};
use rand::Rng;

/// Generate a fresh session identifier, e.g. `loom-monitor-4821`.
pub fn generate_session_id() -> String {
    let mut rng = rand::thread_rng();
    format!("{}{}", SESSION_ID_PREFIX, rng.gen_range(0..SESSION_ID_SPAN))
}

/// Returns true if `id` carries the monitor prefix.  Used by the UI to tell
/// a generated identifier apart from free-text input.
pub fn has_monitor_prefix(id: &str) -> bool {
    id.starts_with(SESSION_ID_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_is_prefixed() {
        let id = generate_session_id();
        assert!(has_monitor_prefix(&id));
    }

    #[test]
    fn generated_id_suffix_is_a_small_number() {
        let id = generate_session_id();
        let suffix = &id[SESSION_ID_PREFIX.len()..];
        let n: u32 = suffix.parse().expect("numeric suffix");
        assert!(n < SESSION_ID_SPAN);
    }

    #[test]
    fn prefix_check_rejects_foreign_ids() {
        assert!(!has_monitor_prefix(""));
        assert!(!has_monitor_prefix("monitor-123"));
        assert!(!has_monitor_prefix("loom-camera-123"));
        assert!(has_monitor_prefix("loom-monitor-0"));
    }
}
