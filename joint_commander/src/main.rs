mod commander;
mod terminal;

use commander::{JointCommander, KeyOutcome};
use eyre::Result;
use panda_teleop_lib::{init_tracing, TeleopConfig};
use terminal::read_key;
use zenoh::qos::CongestionControl;
use zenoh::{Config, Wait};

fn main() -> Result<()> {
    let _guard = init_tracing();

    tracing::info!("Starting joint commander node");

    let config_path =
        std::env::var("TELEOP_CONFIG").unwrap_or_else(|_| "config/panda_teleop.toml".to_string());

    let config = if std::path::Path::new(&config_path).exists() {
        tracing::info!("Loading teleop config from: {}", config_path);
        TeleopConfig::load_from_file(&config_path)?
    } else {
        tracing::info!("No config file at {}, using defaults", config_path);
        TeleopConfig::default()
    };
    config.validate()?;

    let session = open_session()?;

    let publisher = session
        .declare_publisher(config.key_expr().to_string())
        // Fire-and-forget: let the transport drop under congestion rather
        // than block the key loop.
        .congestion_control(CongestionControl::Drop)
        .wait()
        .map_err(|e| eyre::eyre!("Failed to declare publisher {}: {}", config.topic, e))?;
    tracing::info!("Publisher: {}", config.topic);

    let mut commander = JointCommander::new(&config);

    tracing::info!("Joint commander initialized");
    tracing::info!("Available commands:");
    tracing::info!("1-7    - Increase the matching joint by {} rad", config.step);
    tracing::info!("- then 1-7 - Decrease the matching joint instead");
    tracing::info!("Ctrl+C - Quit");

    loop {
        let key = read_key()?;

        match commander.handle_key(key) {
            KeyOutcome::Command(trajectory) => {
                let serialized = serde_json::to_vec(&trajectory)?;
                publisher
                    .put(serialized)
                    .wait()
                    .map_err(|e| eyre::eyre!("Failed to publish trajectory: {}", e))?;
                tracing::info!("Sent joint trajectory command");
                tracing::debug!("Positions: {:?}", commander.positions());
            }
            KeyOutcome::SignArmed => {
                tracing::debug!("Next joint key will decrement");
            }
            KeyOutcome::Ignored => {
                tracing::debug!("Ignoring key: {:?}", key);
            }
            KeyOutcome::Quit => {
                tracing::info!("Interrupt received - shutting down joint commander");
                break;
            }
        }
    }

    session
        .close()
        .wait()
        .map_err(|e| eyre::eyre!("Failed to close Zenoh session: {}", e))?;

    Ok(())
}

fn open_session() -> Result<zenoh::Session> {
    let config_path =
        std::env::var("ZENOH_CONFIG").unwrap_or_else(|_| "config/zenoh_config.json5".to_string());

    let config = if std::path::Path::new(&config_path).exists() {
        tracing::info!("Loading Zenoh config from: {}", config_path);
        Config::from_file(&config_path)
            .map_err(|e| eyre::eyre!("Failed to load Zenoh config from {}: {}", config_path, e))?
    } else {
        tracing::info!("No Zenoh config at {}, using peer mode", config_path);
        let mut config = Config::default();
        config
            .insert_json5("mode", "\"peer\"")
            .map_err(|e| eyre::eyre!("Failed to set Zenoh mode: {}", e))?;
        config
    };

    let session = zenoh::open(config)
        .wait()
        .map_err(|e| eyre::eyre!("Failed to open Zenoh session: {}", e))?;
    tracing::info!("Zenoh session ID: {}", session.zid());

    Ok(session)
}
