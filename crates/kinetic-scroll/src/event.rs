use std::time::Duration;

use serde::{Deserialize, Serialize};

use kinetic_core::Point;

/// Identifies the event source a gesture engine is attached to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(pub u64);

/// Pointer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Press,
    Move,
    Release,
}

/// Pointer event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Event source the pointer is over
    #[serde(default)]
    pub target: TargetId,
    pub kind: PointerKind,
    /// Position in target coordinates
    pub pos: Point,
    /// Host timestamp
    #[serde(with = "millis")]
    pub time: Duration,
}

impl PointerEvent {
    pub fn new(target: TargetId, kind: PointerKind, pos: Point, time: Duration) -> Self {
        Self {
            target,
            kind,
            pos,
            time,
        }
    }

    pub fn press(target: TargetId, pos: Point, time: Duration) -> Self {
        Self::new(target, PointerKind::Press, pos, time)
    }

    pub fn moved(target: TargetId, pos: Point, time: Duration) -> Self {
        Self::new(target, PointerKind::Move, pos, time)
    }

    pub fn release(target: TargetId, pos: Point, time: Duration) -> Self {
        Self::new(target, PointerKind::Release, pos, time)
    }
}

/// Timestamps travel as whole milliseconds (`"time": 120`)
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
