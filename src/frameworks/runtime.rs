// Framework bootstrap for a game session.

use crate::domain::ControlInput;
use crate::domain::tuning::GameTuning;
use crate::frameworks::config;
use crate::interface_adapters::console;
use crate::interface_adapters::protocol::ReadyPayload;
use crate::interface_adapters::state::SessionClock;
use crate::use_cases::{WorldSettings, WorldUpdate, world_task};

use std::{io, sync::Arc, time::Duration};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::{Notify, broadcast, mpsc};

/// Everything needed to run one session.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    /// Capacity for inbound controls.
    pub input_channel_capacity: usize,
    /// Capacity for broadcast world updates.
    pub world_broadcast_capacity: usize,
    /// Fixed tick interval for the frame driver.
    pub tick_interval: Duration,
    /// Emit a plain snapshot every N ticks (updates with events always go out).
    pub snapshot_every: u64,
    pub tuning: GameTuning,
}

impl SessionSettings {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let tuning_path = config::tuning_path();
        let tuning = config::load_tuning(tuning_path.as_deref())?;
        if let Some(path) = &tuning_path {
            tracing::debug!(path = %path.display(), "tuning loaded");
        }

        Ok(Self {
            input_channel_capacity: config::INPUT_CHANNEL_CAPACITY,
            world_broadcast_capacity: config::WORLD_BROADCAST_CAPACITY,
            tick_interval: config::tick_interval(),
            snapshot_every: config::snapshot_every_ticks(),
            tuning,
        })
    }
}

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries the protocol, so logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs a session reading controls from `input` and writing updates to `output`.
///
/// Returns once input ends (EOF or `Quit`) or output can no longer be written,
/// and the world and writer have stopped. An output failure is reported first.
pub async fn run<R, W>(input: R, output: W, settings: SessionSettings) -> io::Result<()>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    settings.tuning.validate().map_err(|reason| {
        tracing::error!(%reason, "invalid tuning; scene initialization aborted");
        io::Error::new(io::ErrorKind::InvalidInput, reason)
    })?;

    // input_tx/rx: All controls go to the single world task.
    let (input_tx, input_rx) = mpsc::channel::<ControlInput>(settings.input_channel_capacity);
    // world_tx/rx: World updates fan out to the output writer.
    let (world_tx, world_rx) =
        broadcast::channel::<WorldUpdate>(settings.world_broadcast_capacity);
    let shutdown = Arc::new(Notify::new());

    let world = tokio::spawn(world_task(
        input_rx,
        world_tx,
        WorldSettings {
            tick_interval: settings.tick_interval,
            tuning: settings.tuning,
        },
        SessionClock::start(),
        shutdown.clone(),
    ));

    let mut writer = tokio::spawn(console::write_world_updates(
        world_rx,
        output,
        settings.snapshot_every,
        ReadyPayload {
            tick_interval_ms: settings.tick_interval.as_millis() as u64,
            projectile_slots: settings.tuning.craft.projectile_slots,
        },
    ));

    tracing::info!("session started");
    // Whichever side ends first stops the world.
    let (read_result, write_result) = tokio::select! {
        read = console::read_controls(input, input_tx) => {
            // Stop the world; its sender drops and the writer drains and exits.
            shutdown.notify_one();
            (read, (&mut writer).await)
        }
        written = &mut writer => {
            tracing::warn!("output ended before input; stopping session");
            shutdown.notify_one();
            (Ok(()), written)
        }
    };
    world.await.map_err(io::Error::other)?;
    let write_result = write_result.map_err(io::Error::other)?;

    write_result
        .inspect_err(|e| tracing::error!(error = %e, "output failed"))
        .map_err(io::Error::other)?;
    read_result
        .inspect_err(|e| tracing::error!(error = %e, "input failed"))
        .map_err(io::Error::other)?;

    tracing::info!("session ended");
    Ok(())
}

pub async fn run_with_config() -> io::Result<()> {
    init_runtime();

    let settings = SessionSettings::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
    });
    let settings = settings.map_err(io::Error::other)?;

    run(tokio::io::stdin(), tokio::io::stdout(), settings).await
}
