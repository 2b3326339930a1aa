// 10 Hz command loop: poll keyboard, update velocity, publish stamped command

use std::io::stdout;

use tokio::time::interval;
use tracing::{info, warn};

use crate::config::PUBLISH_PERIOD;
use crate::display::StatusDisplay;
use crate::input::{Key, KeySource, TerminalKeys};
use crate::messages::VelocityCommand;
use crate::state::VelocityState;

/// Error types for the teleop loop
#[derive(Debug, thiserror::Error)]
pub enum TeleopError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Command encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(zenoh::Error),
}

impl From<zenoh::Error> for TeleopError {
    fn from(e: zenoh::Error) -> Self {
        Self::Transport(e)
    }
}

pub type Result<T> = std::result::Result<T, TeleopError>;

/// One teleop session: velocity state plus the frame its commands name
pub struct Teleop {
    state: VelocityState,
    frame_id: String,
}

impl Teleop {
    pub fn new(frame_id: impl Into<String>) -> Self {
        Self {
            state: VelocityState::new(),
            frame_id: frame_id.into(),
        }
    }

    /// Run one cycle's state transition and snapshot the resulting command
    pub fn step(&mut self, key: Option<char>) -> VelocityCommand {
        self.state.apply_key(key);
        VelocityCommand::stamped(&self.frame_id, self.state)
    }

    pub fn state(&self) -> VelocityState {
        self.state
    }
}

pub async fn run(key_expr: &str, frame_id: &str) -> Result<()> {
    info!("Opening Zenoh session...");
    let session = zenoh::open(zenoh::Config::default()).await?;
    let publisher = session.declare_publisher(key_expr.to_string()).await?;

    info!(
        "Teleop started: publishing to {} every {}ms",
        key_expr,
        PUBLISH_PERIOD.as_millis()
    );

    let mut display = StatusDisplay::new(stdout());
    display.print_usage()?;

    // Raw mode is held for the rest of the loop; dropping the source
    // restores the terminal on every exit path.
    let mut keys = TerminalKeys::new()?;

    let mut teleop = Teleop::new(frame_id);
    let mut tick = interval(PUBLISH_PERIOD);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = tick.tick() => {}
            _ = &mut ctrl_c => break,
        }

        // 1. Poll for the most recent key (non-blocking)
        let key = match keys.poll()? {
            Some(Key::Quit) => break,
            Some(Key::Char(c)) => Some(c),
            None => None,
        };

        // 2. Apply the key and snapshot a stamped command
        let cmd = teleop.step(key);

        // 3. Publish; delivery failures are the transport's concern and
        //    must not stall the loop
        let payload = serde_json::to_string(&cmd)?;
        if let Err(e) = publisher.put(payload).await {
            warn!("Failed to publish command: {}", e);
        }

        // 4. Refresh the status line
        display.update(teleop.state())?;
    }

    // Restore the terminal before any further output
    drop(keys);
    println!();

    info!("Teleop stopped, sending zero velocity");
    let stop_cmd = teleop.step(Some('s'));
    if let Err(e) = publisher.put(serde_json::to_string(&stop_cmd)?).await {
        warn!("Failed to publish stop command: {}", e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeySource};

    /// Feeds a fixed key sequence, then reports no input
    struct ScriptedKeys {
        keys: std::vec::IntoIter<Option<Key>>,
    }

    impl ScriptedKeys {
        fn new(keys: Vec<Option<Key>>) -> Self {
            Self {
                keys: keys.into_iter(),
            }
        }
    }

    impl KeySource for ScriptedKeys {
        fn poll(&mut self) -> std::io::Result<Option<Key>> {
            Ok(self.keys.next().flatten())
        }
    }

    #[test]
    fn test_idle_cycles_emit_zero_commands() {
        let mut teleop = Teleop::new("base_link");
        let mut keys = ScriptedKeys::new(vec![]);

        let mut commands = Vec::new();
        for _ in 0..5 {
            let key = match keys.poll().unwrap() {
                Some(Key::Char(c)) => Some(c),
                _ => None,
            };
            commands.push(teleop.step(key));
        }

        assert_eq!(commands.len(), 5);
        for cmd in &commands {
            assert_eq!(cmd.linear, 0.0);
            assert_eq!(cmd.angular, 0.0);
        }
        for pair in commands.windows(2) {
            assert!(pair[0].stamp <= pair[1].stamp);
        }
    }

    #[test]
    fn test_key_sequence_accumulates_across_cycles() {
        let mut teleop = Teleop::new("base_link");
        let mut keys = ScriptedKeys::new(vec![
            Some(Key::Char('w')),
            Some(Key::Char('w')),
            Some(Key::Char('a')),
        ]);

        let mut commands = Vec::new();
        for _ in 0..3 {
            let key = match keys.poll().unwrap() {
                Some(Key::Char(c)) => Some(c),
                _ => None,
            };
            commands.push(teleop.step(key));
        }

        assert_eq!((commands[0].linear, commands[0].angular), (0.1, 0.0));
        assert_eq!((commands[1].linear, commands[1].angular), (0.2, 0.0));
        assert_eq!((commands[2].linear, commands[2].angular), (0.2, 0.1));
    }

    #[test]
    fn test_commands_carry_frame_id() {
        let mut teleop = Teleop::new("odom");
        let cmd = teleop.step(None);
        assert_eq!(cmd.frame_id, "odom");
    }

    #[test]
    fn test_velocity_persists_without_input() {
        let mut teleop = Teleop::new("base_link");
        teleop.step(Some('w'));

        // No decay over idle cycles
        for _ in 0..10 {
            let cmd = teleop.step(None);
            assert_eq!(cmd.linear, 0.1);
        }
    }
}
