//! In-memory stand-ins for the collaborators of the controller.
//!
//! All mocks are cheap to clone and clones share state, so a test can keep a handle to a mock
//! after moving it into a [`DepositorController`](crate::controller::DepositorController).

mod bridge;
mod vault;

pub(crate) use bridge::{MockBridge, MockBridgeError};
pub(crate) use finalizer::{FinalizedCall, HookFailed, RecordingFinalizer};
pub(crate) use vault::MockVault;

use crate::clock::Clock;

/// A [`Clock`] that is stuck at a given time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub(crate) u32);

impl Clock for FixedClock {
    fn now(&self) -> u32 {
        self.0
    }
}
