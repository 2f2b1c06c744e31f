// Shared helpers for driving a full session over in-memory pipes.
use rocket_game::SessionSettings;
use rocket_game::domain::tuning::{GameTuning, SaucerTuning};
use std::{io, time::Duration};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, Lines},
    task::JoinHandle,
};

// Upper bound for any single wait so a broken session fails instead of hanging.
const WAIT: Duration = Duration::from_secs(5);

pub struct TestSession {
    input: DuplexStream,
    output: Lines<BufReader<DuplexStream>>,
    handle: JoinHandle<io::Result<()>>,
}

// Tuning with a motionless saucer so hit timing is predictable.
pub fn still_tuning() -> GameTuning {
    GameTuning {
        saucer: SaucerTuning {
            hover_amplitude: 0.0,
            ..SaucerTuning::default()
        },
        ..GameTuning::default()
    }
}

pub fn settings(tuning: GameTuning) -> SessionSettings {
    SessionSettings {
        input_channel_capacity: 64,
        world_broadcast_capacity: 256,
        tick_interval: Duration::from_millis(1),
        snapshot_every: 1,
        tuning,
    }
}

impl TestSession {
    pub fn start(tuning: GameTuning) -> Self {
        let (input, session_input) = tokio::io::duplex(4096);
        let (session_output, output) = tokio::io::duplex(256 * 1024);
        let handle = tokio::spawn(rocket_game::run(
            session_input,
            session_output,
            settings(tuning),
        ));

        Self {
            input,
            output: BufReader::new(output).lines(),
            handle,
        }
    }

    pub async fn send(&mut self, msg: serde_json::Value) {
        let mut line = msg.to_string();
        line.push('\n');
        self.input
            .write_all(line.as_bytes())
            .await
            .expect("session input should accept writes");
    }

    pub async fn next_message(&mut self) -> serde_json::Value {
        let line = tokio::time::timeout(WAIT, self.output.next_line())
            .await
            .expect("session should produce output in time")
            .expect("session output should be readable")
            .expect("session output ended unexpectedly");
        serde_json::from_str(&line).expect("each output line is json")
    }

    // Reads world updates until one carries an event of `kind`; returns that update.
    pub async fn wait_for_event(&mut self, kind: &str) -> serde_json::Value {
        loop {
            let msg = self.next_message().await;
            let has_event = msg["data"]["events"]
                .as_array()
                .is_some_and(|events| events.iter().any(|e| e["kind"] == kind));
            if has_event {
                return msg;
            }
        }
    }

    // Reads world updates until `predicate` holds for one; returns that update.
    pub async fn wait_for(
        &mut self,
        predicate: impl Fn(&serde_json::Value) -> bool,
    ) -> serde_json::Value {
        loop {
            let msg = self.next_message().await;
            if msg["type"] == "WorldUpdate" && predicate(&msg["data"]) {
                return msg;
            }
        }
    }

    // Closes input, drains remaining output, and returns the session result.
    pub async fn finish(self) -> io::Result<()> {
        let TestSession {
            input,
            mut output,
            handle,
        } = self;
        drop(input);

        tokio::time::timeout(WAIT, async {
            while let Ok(Some(_)) = output.next_line().await {}
        })
        .await
        .expect("session output should close after input ends");

        tokio::time::timeout(WAIT, handle)
            .await
            .expect("session should stop after input ends")
            .expect("session task should not panic")
    }
}
