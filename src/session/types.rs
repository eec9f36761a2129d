//! Per-player session phases and the per-tick input sample.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::jig::JigState;
use super::scheduler::CancelToken;
use crate::core::types::{PlayerId, Pose};
use crate::equipment::EquipmentSnapshot;
use crate::reeling::ReelingSession;
use crate::zones::ZoneId;

/// Controls sampled once per tick, before any state update.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Reel in (pushes the capture bar right).
    pub hold: bool,
    pub jig: bool,
    /// Starts charging a cast, or releases one that is charging.
    pub cast_toggle: bool,
    /// Any of forward/back/strafe. Fishing stops while walking.
    pub movement: bool,
    pub pose: Pose,
}

/// Which phase a session is in, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Idle,
    Casting,
    Traveling,
    Jigging,
    Reeling,
}

#[derive(Debug, Clone, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Casting {
        power: f64,
    },
    /// Line is in the air. The travel timer moves it to `Jigging`.
    Traveling {
        landing: DVec3,
        equipment: EquipmentSnapshot,
        token: CancelToken,
    },
    /// Waiting for a bite. The jig timer resolves the catch.
    Jigging {
        landing: DVec3,
        zone: ZoneId,
        equipment: EquipmentSnapshot,
        jig: JigState,
        token: CancelToken,
    },
    Reeling {
        session: Box<ReelingSession>,
        zone: ZoneId,
    },
}

impl SessionPhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            SessionPhase::Idle => PhaseKind::Idle,
            SessionPhase::Casting { .. } => PhaseKind::Casting,
            SessionPhase::Traveling { .. } => PhaseKind::Traveling,
            SessionPhase::Jigging { .. } => PhaseKind::Jigging,
            SessionPhase::Reeling { .. } => PhaseKind::Reeling,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SessionPhase::Idle)
    }

    /// Cancels the pending timer owned by this phase, if any.
    pub fn cancel_timer(&self) {
        match self {
            SessionPhase::Traveling { token, .. } | SessionPhase::Jigging { token, .. } => {
                token.cancel()
            }
            _ => {}
        }
    }

    pub fn reel(&self) -> Option<&ReelingSession> {
        match self {
            SessionPhase::Reeling { session, .. } => Some(session),
            _ => None,
        }
    }

    pub fn cast_power(&self) -> Option<f64> {
        match self {
            SessionPhase::Casting { power } => Some(*power),
            _ => None,
        }
    }
}

/// A joined player's fishing state.
#[derive(Debug, Clone)]
pub struct PlayerSession {
    pub player: PlayerId,
    pub phase: SessionPhase,
    /// Casts released since joining.
    pub casts: u64,
}

impl PlayerSession {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            phase: SessionPhase::Idle,
            casts: 0,
        }
    }
}
