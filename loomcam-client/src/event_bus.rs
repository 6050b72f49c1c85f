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

//! Global event bus for framework-agnostic client events.
//!
//! A MPMC broadcast channel: every subscriber receives every [PeerEvent]
//! independently.  The role drivers emit here in addition to invoking their
//! per-event callbacks, so a UI can either wire callbacks or subscribe.

use crate::events::PeerEvent;
use async_broadcast::{broadcast, Receiver, Sender};
use once_cell::sync::Lazy;
use std::ops::Deref;

/// Capacity of the event bus channel
const EVENT_BUS_CAPACITY: usize = 256;

static SENDER: Lazy<Sender<PeerEvent>> = Lazy::new(|| {
    let (s, r) = broadcast(EVENT_BUS_CAPACITY);

    // Keep one receiver alive in the background so the channel never closes
    // while there are no UI subscribers.
    #[cfg(target_arch = "wasm32")]
    {
        let mut receiver = r;
        wasm_bindgen_futures::spawn_local(async move {
            while (receiver.recv().await).is_ok() {
                // Discard; this receiver only holds the channel open.
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    std::mem::drop(r);

    s
});

/// Subscribe to client events.
///
/// Returns a receiver that will receive all future events (broadcast
/// pattern; each subscriber gets its own copy).
pub fn subscribe_peer_events() -> Receiver<PeerEvent> {
    SENDER.deref().new_receiver()
}

/// Emit an event to all subscribers.  Non-blocking; if the channel is full
/// the event is dropped.
pub fn emit_peer_event(event: PeerEvent) {
    let _ = SENDER.deref().try_broadcast(event);
}
