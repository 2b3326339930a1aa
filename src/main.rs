use clap::Parser;
use tracing_subscriber::EnvFilter;

use zenoh_teleop_keyboard::config::{FRAME_ID, TOPIC_CMD_VEL};

/// Keyboard teleop publishing stamped velocity commands over Zenoh
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Zenoh key expression to publish commands on
    #[arg(long, default_value = TOPIC_CMD_VEL)]
    key: String,

    /// Reference frame stamped into each command
    #[arg(long, default_value = FRAME_ID)]
    frame_id: String,
}

#[tokio::main]
async fn main() {
    // Setup logging (set RUST_LOG=info or debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    let args = Args::parse();

    if let Err(e) = zenoh_teleop_keyboard::teleop::run(&args.key, &args.frame_id).await {
        eprintln!("Teleop error: {}", e);
        std::process::exit(1);
    }
}
