// Wire protocol DTOs and conversions for the JSON-lines session transport.

use crate::domain::{
    ControlInput, CraftSnapshot, ProjectileSnapshot, RotationDirection, SaucerSnapshot, SimEvent,
};
use crate::interface_adapters::keymap::control_for_key;
use crate::use_cases::WorldUpdate;
use serde::{Deserialize, Serialize};

/// Messages written to the output stream, one JSON document per line.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Sent once before the first world update.
    Ready(ReadyPayload),
    // Snapshot of the world for a given tick.
    WorldUpdate(WorldUpdateDto),
}

/// Messages read from the input stream, one JSON document per line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    RotateLeft(bool),
    RotateRight(bool),
    Thrust(bool),
    Fire,
    // Raw key event, mapped to a control on the adapter side.
    Key(KeyPayload),
    // Ends the session.
    Quit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyPayload {
    pub key: String,
    pub pressed: bool,
}

impl ClientMessage {
    /// Control carried by this message, if any.
    ///
    /// `Quit` and unmapped keys carry none.
    pub fn control(&self) -> Option<ControlInput> {
        match self {
            ClientMessage::RotateLeft(on) => Some(ControlInput::Rotate {
                direction: RotationDirection::Left,
                on: *on,
            }),
            ClientMessage::RotateRight(on) => Some(ControlInput::Rotate {
                direction: RotationDirection::Right,
                on: *on,
            }),
            ClientMessage::Thrust(on) => Some(ControlInput::Thrust { on: *on }),
            ClientMessage::Fire => Some(ControlInput::Fire),
            ClientMessage::Key(k) => control_for_key(&k.key, k.pressed),
            ClientMessage::Quit => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadyPayload {
    pub tick_interval_ms: u64,
    pub projectile_slots: usize,
}

/// Snapshot of the world sent on each emitted tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub craft: CraftStateDto,
    pub projectiles: Vec<ProjectileStateDto>,
    pub saucer: SaucerStateDto,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<SimEventDto>,
}

impl From<WorldUpdate> for WorldUpdateDto {
    fn from(update: WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            craft: CraftStateDto::from(&update.craft),
            projectiles: update
                .projectiles
                .iter()
                .map(ProjectileStateDto::from)
                .collect(),
            saucer: SaucerStateDto::from(&update.saucer),
            events: update.events.into_iter().map(SimEventDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CraftStateDto {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
    pub rot: f32,
    pub thrust: f32,
    pub thrusting: bool,
    pub hit_animation: bool,
}

impl From<&CraftSnapshot> for CraftStateDto {
    fn from(craft: &CraftSnapshot) -> Self {
        Self {
            x: craft.x,
            y: craft.y,
            heading: craft.heading,
            rot: craft.rot,
            thrust: craft.thrust,
            thrusting: craft.thrusting,
            hit_animation: craft.hit_animation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileStateDto {
    pub slot: usize,
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

impl From<&ProjectileSnapshot> for ProjectileStateDto {
    fn from(projectile: &ProjectileSnapshot) -> Self {
        Self {
            slot: projectile.slot,
            x: projectile.x,
            y: projectile.y,
            heading: projectile.heading,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SaucerStateDto {
    pub x: f32,
    pub y: f32,
    pub rot: f32,
    pub facing: f32,
    pub hit_animation: bool,
}

impl From<&SaucerSnapshot> for SaucerStateDto {
    fn from(saucer: &SaucerSnapshot) -> Self {
        Self {
            x: saucer.x,
            y: saucer.y,
            rot: saucer.rot,
            facing: saucer.facing,
            hit_animation: saucer.hit_animation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum SimEventDto {
    ProjectileFired { slot: usize, heading: f32 },
    SaucerHit { slot: usize, x: f32, y: f32 },
    SaucerRecovered,
    CraftHit,
    CraftRespawned,
}

impl From<SimEvent> for SimEventDto {
    fn from(event: SimEvent) -> Self {
        match event {
            SimEvent::ProjectileFired { slot, heading } => {
                SimEventDto::ProjectileFired { slot, heading }
            }
            SimEvent::SaucerHit { slot, x, y } => SimEventDto::SaucerHit { slot, x, y },
            SimEvent::SaucerRecovered => SimEventDto::SaucerRecovered,
            SimEvent::CraftHit => SimEventDto::CraftHit,
            SimEvent::CraftRespawned => SimEventDto::CraftRespawned,
        }
    }
}
