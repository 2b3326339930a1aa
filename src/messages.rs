// Message types published by the teleop

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::state::VelocityState;

/// Wall-clock time of emission, split ROS-header style
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Stamp {
    pub sec: i64,
    pub nanosec: u32,
}

impl Stamp {
    /// Current wall-clock time; a pre-epoch clock degrades to the zero stamp
    pub fn now() -> Self {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            sec: elapsed.as_secs() as i64,
            nanosec: elapsed.subsec_nanos(),
        }
    }
}

// Stamped velocity command from teleop -> base
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VelocityCommand {
    pub stamp: Stamp,
    pub frame_id: String,
    pub linear: f64,
    pub angular: f64,
}

impl VelocityCommand {
    /// Snapshot the current velocity state with a fresh timestamp
    pub fn stamped(frame_id: &str, state: VelocityState) -> Self {
        Self {
            stamp: Stamp::now(),
            frame_id: frame_id.to_string(),
            linear: state.linear,
            angular: state.angular,
        }
    }
}
