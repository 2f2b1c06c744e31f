use crate::domain::ControlInput;
use crate::interface_adapters::protocol::{
    ClientMessage, ReadyPayload, ServerMessage, WorldUpdateDto,
};
use crate::use_cases::WorldUpdate;

use std::fmt;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

#[derive(Debug)]
pub enum ConsoleError {
    Io(std::io::Error),
    InputClosed,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Io(e) => write!(f, "console i/o failed: {e}"),
            ConsoleError::InputClosed => write!(f, "world input channel closed"),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(e: std::io::Error) -> Self {
        ConsoleError::Io(e)
    }
}

/// Reads JSON-lines client messages and forwards their controls to the world.
///
/// Returns on end of input or a `Quit` message. Malformed lines, including ones
/// that are not valid UTF-8, are logged and skipped.
pub async fn read_controls<R>(
    reader: R,
    input_tx: mpsc::Sender<ControlInput>,
) -> Result<(), ConsoleError>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                warn!(error = %e, "ignoring input line that is not utf-8");
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let msg: ClientMessage = match serde_json::from_str(line) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(error = %e, "ignoring malformed input line");
                continue;
            }
        };

        if matches!(msg, ClientMessage::Quit) {
            info!("quit requested");
            return Ok(());
        }

        let Some(control) = msg.control() else {
            debug!(?msg, "input carries no control");
            continue;
        };

        input_tx
            .send(control)
            .await
            .map_err(|_| ConsoleError::InputClosed)?;
    }

    info!("input closed");
    Ok(())
}

/// Serializes world updates as JSON lines.
///
/// Plain snapshots are written every `snapshot_every` ticks; updates carrying
/// events are always written unless the writer falls behind the broadcast
/// buffer. Updates dropped on lag are gone, events included, and the writer
/// resumes from the oldest update still buffered. Exits once the world update
/// channel closes.
pub async fn write_world_updates<W>(
    mut world_rx: broadcast::Receiver<WorldUpdate>,
    mut writer: W,
    snapshot_every: u64,
    ready: ReadyPayload,
) -> Result<(), ConsoleError>
where
    W: AsyncWrite + Unpin,
{
    let snapshot_every = snapshot_every.max(1);
    write_message(&mut writer, &ServerMessage::Ready(ready)).await?;

    loop {
        match world_rx.recv().await {
            Ok(update) => {
                if update.events.is_empty() && update.tick % snapshot_every != 0 {
                    continue;
                }
                let msg = ServerMessage::WorldUpdate(WorldUpdateDto::from(update));
                write_message(&mut writer, &msg).await?;
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "output lagged; skipped updates and their events are lost");
            }
            Err(broadcast::error::RecvError::Closed) => {
                debug!("world updates channel closed; writer exiting");
                break;
            }
        }
    }

    writer.shutdown().await?;
    Ok(())
}

async fn write_message<W>(writer: &mut W, msg: &ServerMessage) -> Result<(), ConsoleError>
where
    W: AsyncWrite + Unpin,
{
    let mut txt = match serde_json::to_string(msg) {
        Ok(txt) => txt,
        Err(e) => {
            error!(error = ?e, "failed to serialize output message");
            return Ok(());
        }
    };
    txt.push('\n');

    writer.write_all(txt.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RotationDirection;
    use crate::domain::tuning::GameTuning;
    use crate::use_cases::Game;
    use std::time::Duration;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn when_lines_are_read_then_controls_are_forwarded_in_order() {
        let input = concat!(
            "{\"type\":\"Key\",\"data\":{\"key\":\"a\",\"pressed\":true}}\n",
            "not json\n",
            "\n",
            "{\"type\":\"Key\",\"data\":{\"key\":\"z\",\"pressed\":true}}\n",
            "{\"type\":\"Fire\"}\n",
        );
        let (tx, mut rx) = mpsc::channel(8);

        read_controls(input.as_bytes(), tx)
            .await
            .expect("reading should succeed");

        assert_eq!(
            rx.recv().await,
            Some(ControlInput::Rotate {
                direction: RotationDirection::Left,
                on: true
            })
        );
        assert_eq!(rx.recv().await, Some(ControlInput::Fire));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn when_a_line_is_not_utf8_then_it_is_skipped_and_reading_continues() {
        let mut input = b"{\"type\":\"Fire\"}\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"{\"type\":\"Fire\"}\n");
        let (tx, mut rx) = mpsc::channel(8);

        read_controls(input.as_slice(), tx)
            .await
            .expect("a bad line should not end reading");

        assert_eq!(rx.recv().await, Some(ControlInput::Fire));
        assert_eq!(rx.recv().await, Some(ControlInput::Fire));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn when_quit_arrives_then_later_lines_are_not_read() {
        let input = "{\"type\":\"Quit\"}\n{\"type\":\"Fire\"}\n";
        let (tx, mut rx) = mpsc::channel(8);

        read_controls(input.as_bytes(), tx)
            .await
            .expect("reading should succeed");

        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn when_world_closes_then_writer_emits_ready_and_selected_updates() {
        let (world_tx, world_rx) = broadcast::channel(16);
        let (client, server) = tokio::io::duplex(64 * 1024);
        let writer = tokio::spawn(write_world_updates(
            world_rx,
            server,
            2,
            ReadyPayload {
                tick_interval_ms: 16,
                projectile_slots: 10,
            },
        ));

        let mut game = Game::new(&GameTuning::default());
        for frame in 1..=4 {
            world_tx
                .send(game.step(Duration::from_millis(frame * 16)))
                .expect("writer is subscribed");
        }
        game.apply(ControlInput::Fire);
        world_tx
            .send(game.step(Duration::from_millis(80)))
            .expect("writer is subscribed");
        drop(world_tx);

        writer
            .await
            .expect("writer task should not panic")
            .expect("writer should finish cleanly");

        let mut out = String::new();
        let mut client = client;
        client
            .read_to_string(&mut out)
            .await
            .expect("output should be readable");
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).expect("each line is json"))
            .collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["type"], "Ready");
        assert_eq!(lines[1]["data"]["tick"], 2);
        assert_eq!(lines[2]["data"]["tick"], 4);
        assert_eq!(lines[3]["data"]["tick"], 5);
        assert_eq!(lines[3]["data"]["events"][0]["kind"], "ProjectileFired");
    }

    #[tokio::test]
    async fn when_writer_lags_then_it_resumes_from_oldest_buffered_update() {
        let (world_tx, world_rx) = broadcast::channel(2);
        let (client, server) = tokio::io::duplex(64 * 1024);

        // Fill past capacity before the writer task gets to run.
        let mut game = Game::new(&GameTuning::default());
        for frame in 1..=5 {
            world_tx
                .send(game.step(Duration::from_millis(frame * 16)))
                .expect("receiver is subscribed");
        }
        drop(world_tx);

        write_world_updates(
            world_rx,
            server,
            1,
            ReadyPayload {
                tick_interval_ms: 16,
                projectile_slots: 10,
            },
        )
        .await
        .expect("writer should finish cleanly");

        let mut out = String::new();
        let mut client = client;
        client
            .read_to_string(&mut out)
            .await
            .expect("output should be readable");
        let ticks: Vec<u64> = out
            .lines()
            .skip(1)
            .map(|l| {
                let v: serde_json::Value = serde_json::from_str(l).expect("each line is json");
                v["data"]["tick"].as_u64().expect("updates carry a tick")
            })
            .collect();

        assert_eq!(ticks, vec![4, 5]);
    }
}
