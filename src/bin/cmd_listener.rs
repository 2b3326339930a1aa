// Command listener: read-only check that teleop commands are arriving
//
// Subscribes to the command key expression and prints each command as it
// lands. Useful for verifying delivery without a robot on the other end.
//
// Usage: cargo run --bin cmd_listener -- [key_expr]

use tracing::warn;
use tracing_subscriber::EnvFilter;

use zenoh_teleop_keyboard::config::TOPIC_CMD_VEL;
use zenoh_teleop_keyboard::messages::VelocityCommand;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // Get key expression from args or use default
    let key = std::env::args()
        .nth(1)
        .unwrap_or_else(|| TOPIC_CMD_VEL.to_string());

    println!("Listening for velocity commands on {}", key);

    let session = zenoh::open(zenoh::Config::default()).await?;
    let subscriber = session.declare_subscriber(key).await?;

    while let Ok(sample) = subscriber.recv_async().await {
        let payload = sample.payload().to_bytes();
        match serde_json::from_slice::<VelocityCommand>(&payload) {
            Ok(cmd) => println!(
                "[{}.{:09}] {}: linear={:.2}, angular={:.2}",
                cmd.stamp.sec, cmd.stamp.nanosec, cmd.frame_id, cmd.linear, cmd.angular
            ),
            Err(e) => {
                warn!("Failed to parse command: {}", e);
            }
        }
    }

    Ok(())
}
