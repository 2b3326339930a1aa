// Publish cadence, topics, frame configuration
use std::time::Duration;

// Fixed period of the command loop
pub const PUBLISH_PERIOD: Duration = Duration::from_millis(100);

// Zenoh key expressions
pub const TOPIC_CMD_VEL: &str = "teleop/cmd_vel"; // stamped velocity commands

// Reference frame stamped into every command
// Adjust per robot configuration
pub const FRAME_ID: &str = "base_link";
