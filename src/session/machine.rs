//! The per-tick fishing state machine.
//!
//! ```text
//! Idle ──toggle──▶ Casting ──toggle──▶ Traveling ──timer──▶ Jigging ──timer──▶ resolve
//!  ▲                                                                            │
//!  └──────────────── reel ends / loot / too heavy / no bite ◀── Reeling ◀── fish┘
//! ```
//!
//! Each call to [`FishingSystem::tick`] advances the tick counter, applies
//! every player's input, then fires the timers that came due. It returns a
//! [`FishingEvent`] list describing what happened so callers can react
//! without inspecting session internals.

use glam::DVec3;
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::cast::{bobber_position, charge_power, find_water, landing_position};
use super::jig::JigState;
use super::scheduler::{CancelToken, Scheduler};
use super::types::{PhaseKind, PlayerSession, SessionPhase, TickInput};
use crate::catalog::{Catalog, LootItem, Rarity, SpeciesId};
use crate::core::config::FishingConfig;
use crate::core::error::{FishingError, Result};
use crate::core::types::PlayerId;
use crate::equipment::EquipmentSnapshot;
use crate::fishing::{roll_outcome, CatchOutcome, CaughtFish};
use crate::host::{FishingHost, UiEvent};
use crate::reeling::{start_reeling, tick_reeling, MovementPattern, ReelResult, ReelingSession};
use crate::rewards::{dispatch_catch, dispatch_escape, dispatch_loot};
use crate::zones::ZoneId;

/// Something that happened to a player during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum FishingEvent {
    /// Started charging a cast.
    CastStarted { player: PlayerId },
    /// Cast toggle ignored because a fish is on the line.
    CastRejected { player: PlayerId },
    /// Cast released over water; the line is travelling.
    CastReleased {
        player: PlayerId,
        power: f64,
        landing: DVec3,
    },
    /// Cast came down on something other than water.
    CastFailed { player: PlayerId, power: f64 },
    /// Bobber settled and jigging began.
    Landed { player: PlayerId, zone: ZoneId },
    /// A fish bit and reeling began.
    Hooked {
        player: PlayerId,
        species: SpeciesId,
        tier: Rarity,
        pattern: MovementPattern,
    },
    Caught {
        player: PlayerId,
        fish: CaughtFish,
        zone: ZoneId,
        xp: u64,
        ticks: u64,
    },
    Escaped {
        player: PlayerId,
        fish: CaughtFish,
        ticks: u64,
    },
    Loot { player: PlayerId, item: LootItem },
    TooHeavy {
        player: PlayerId,
        species: SpeciesId,
        weight: f64,
    },
    NoBite { player: PlayerId, zone: ZoneId },
    /// The player moved and the session was dropped.
    Aborted { player: PlayerId, phase: PhaseKind },
    /// Catch resolution hit a catalog error; the session was reset.
    ResolutionFailed { player: PlayerId, reason: String },
}

/// Deferred phase transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhaseTask {
    TravelDone(PlayerId),
    JigDone(PlayerId),
}

/// Owns every joined player's session and drives them tick by tick.
#[derive(Debug)]
pub struct FishingSystem {
    config: FishingConfig,
    catalog: Catalog,
    sessions: HashMap<PlayerId, PlayerSession>,
    scheduler: Scheduler<PhaseTask>,
    tick: u64,
}

impl Default for FishingSystem {
    fn default() -> Self {
        Self {
            config: FishingConfig::default(),
            catalog: Catalog::default(),
            sessions: HashMap::new(),
            scheduler: Scheduler::new(),
            tick: 0,
        }
    }
}

impl FishingSystem {
    pub fn new(config: FishingConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        catalog.zones().zone(config.beginner_zone)?;
        Ok(Self {
            config,
            catalog,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &FishingConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Registers a player with an idle session. Returns false if already joined.
    pub fn join(&mut self, player: PlayerId) -> bool {
        if self.sessions.contains_key(&player) {
            return false;
        }
        debug!(%player, "player joined");
        self.sessions.insert(player, PlayerSession::new(player));
        true
    }

    /// Drops a player's session, cancelling any pending timer.
    pub fn leave(&mut self, player: PlayerId) -> Result<()> {
        let session = self
            .sessions
            .remove(&player)
            .ok_or(FishingError::UnknownPlayer(player))?;
        session.phase.cancel_timer();
        debug!(%player, phase = ?session.phase.kind(), "player left");
        Ok(())
    }

    pub fn session(&self, player: PlayerId) -> Result<&PlayerSession> {
        self.sessions
            .get(&player)
            .ok_or(FishingError::UnknownPlayer(player))
    }

    pub fn phase(&self, player: PlayerId) -> Result<PhaseKind> {
        self.session(player).map(|s| s.phase.kind())
    }

    /// Timers that will still fire.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Runs one server tick.
    ///
    /// `inputs` are applied in order. Joined players without an entry get an
    /// empty input so their reel keeps moving. Inputs for unknown players are
    /// ignored.
    pub fn tick<H, R>(
        &mut self,
        inputs: &[(PlayerId, TickInput)],
        host: &mut H,
        rng: &mut R,
    ) -> Vec<FishingEvent>
    where
        H: FishingHost,
        R: Rng,
    {
        self.tick += 1;
        let mut events = Vec::new();

        for (player, input) in inputs {
            if self.sessions.contains_key(player) {
                self.apply_input(*player, input, host, rng, &mut events);
            } else {
                debug!(%player, "input for unknown player ignored");
            }
        }

        let mut idle: Vec<PlayerId> = self
            .sessions
            .keys()
            .filter(|id| !inputs.iter().any(|(player, _)| player == *id))
            .copied()
            .collect();
        idle.sort();
        for player in idle {
            self.apply_input(player, &TickInput::default(), host, rng, &mut events);
        }

        for task in self.scheduler.drain_due(self.tick) {
            match task {
                PhaseTask::TravelDone(player) => self.finish_travel(player, host, &mut events),
                PhaseTask::JigDone(player) => self.finish_jig(player, host, rng, &mut events),
            }
        }

        events
    }

    fn take_phase(&mut self, player: PlayerId) -> Option<SessionPhase> {
        self.sessions
            .get_mut(&player)
            .map(|session| std::mem::take(&mut session.phase))
    }

    fn set_phase(&mut self, player: PlayerId, phase: SessionPhase) {
        if let Some(session) = self.sessions.get_mut(&player) {
            session.phase = phase;
        }
    }

    fn apply_input<H: FishingHost, R: Rng>(
        &mut self,
        player: PlayerId,
        input: &TickInput,
        host: &mut H,
        rng: &mut R,
        events: &mut Vec<FishingEvent>,
    ) {
        let Some(phase) = self.take_phase(player) else {
            return;
        };

        if input.movement {
            if !phase.is_idle() {
                phase.cancel_timer();
                debug!(%player, phase = ?phase.kind(), "session aborted by movement");
                events.push(FishingEvent::Aborted {
                    player,
                    phase: phase.kind(),
                });
            }
            return;
        }

        let next = match phase {
            SessionPhase::Idle => {
                if input.cast_toggle {
                    self.start_cast(player, host, events)
                } else {
                    SessionPhase::Idle
                }
            }
            SessionPhase::Casting { power } => {
                if input.cast_toggle {
                    self.release_cast(player, power, input, host, events)
                } else {
                    let power = charge_power(power, self.config.cast_power_increment);
                    host.send_ui_event(player, UiEvent::CastPower { power });
                    SessionPhase::Casting { power }
                }
            }
            SessionPhase::Traveling { token, .. } if input.cast_toggle => {
                token.cancel();
                debug!(%player, "recast while line was travelling");
                self.start_cast(player, host, events)
            }
            SessionPhase::Jigging { token, .. } if input.cast_toggle => {
                token.cancel();
                debug!(%player, "recast while jigging");
                self.start_cast(player, host, events)
            }
            SessionPhase::Jigging {
                landing,
                zone,
                equipment,
                mut jig,
                token,
            } => {
                let depth = jig.step(input.jig);
                host.send_ui_event(player, UiEvent::JigDepth { depth });
                SessionPhase::Jigging {
                    landing,
                    zone,
                    equipment,
                    jig,
                    token,
                }
            }
            SessionPhase::Reeling { mut session, zone } => {
                if input.cast_toggle {
                    debug!(%player, "cast rejected while reeling");
                    events.push(FishingEvent::CastRejected { player });
                }
                let result = tick_reeling(&mut session, input.hold, rng);
                host.send_ui_event(
                    player,
                    UiEvent::ReelSnapshot {
                        marker: session.marker,
                        bar: session.bar,
                        progress: session.progress,
                    },
                );
                match result {
                    ReelResult::Continue => SessionPhase::Reeling { session, zone },
                    ReelResult::Caught => {
                        self.land_fish(player, *session, zone, host, events);
                        SessionPhase::Idle
                    }
                    ReelResult::Escaped => {
                        let ticks = session.ticks;
                        dispatch_escape(host, player, &session.fish);
                        events.push(FishingEvent::Escaped {
                            player,
                            fish: session.fish,
                            ticks,
                        });
                        SessionPhase::Idle
                    }
                }
            }
            traveling @ SessionPhase::Traveling { .. } => traveling,
        };

        self.set_phase(player, next);
    }

    fn start_cast<H: FishingHost>(
        &mut self,
        player: PlayerId,
        host: &mut H,
        events: &mut Vec<FishingEvent>,
    ) -> SessionPhase {
        if host.equipped_rod(player).is_none() {
            debug!(%player, "cast ignored, no rod equipped");
            return SessionPhase::Idle;
        }
        host.send_ui_event(player, UiEvent::CastPower { power: 0.0 });
        events.push(FishingEvent::CastStarted { player });
        SessionPhase::Casting { power: 0.0 }
    }

    fn release_cast<H: FishingHost>(
        &mut self,
        player: PlayerId,
        power: f64,
        input: &TickInput,
        host: &mut H,
        events: &mut Vec<FishingEvent>,
    ) -> SessionPhase {
        let Some(rod) = host.equipped_rod(player) else {
            debug!(%player, "rod unequipped while charging");
            return SessionPhase::Idle;
        };
        let equipment = EquipmentSnapshot::new(rod, host.equipped_bait(player));

        let target = landing_position(&input.pose, power, equipment.rod.max_distance);
        let Some(water) = find_water(&*host, target, self.config.max_ray_depth) else {
            debug!(%player, power, "cast did not land in water");
            events.push(FishingEvent::CastFailed { player, power });
            return SessionPhase::Idle;
        };
        let landing = bobber_position(water);

        let token = CancelToken::new();
        self.scheduler.schedule(
            self.tick.saturating_add(self.config.travel_ticks()),
            token.clone(),
            PhaseTask::TravelDone(player),
        );
        if let Some(session) = self.sessions.get_mut(&player) {
            session.casts += 1;
        }

        debug!(%player, power, x = landing.x, y = landing.y, z = landing.z, "cast released");
        events.push(FishingEvent::CastReleased {
            player,
            power,
            landing,
        });
        SessionPhase::Traveling {
            landing,
            equipment,
            token,
        }
    }

    fn finish_travel<H: FishingHost>(
        &mut self,
        player: PlayerId,
        host: &mut H,
        events: &mut Vec<FishingEvent>,
    ) {
        let Some(phase) = self.take_phase(player) else {
            return;
        };
        let SessionPhase::Traveling {
            landing,
            equipment,
            token: _,
        } = phase
        else {
            self.set_phase(player, phase);
            return;
        };

        let zone = self.catalog.zones().resolve(landing).id;
        host.send_ui_event(player, UiEvent::MarkerSpawned { position: landing });

        let token = CancelToken::new();
        self.scheduler.schedule(
            self.tick.saturating_add(self.config.jig_ticks()),
            token.clone(),
            PhaseTask::JigDone(player),
        );

        debug!(%player, ?zone, "bobber landed");
        events.push(FishingEvent::Landed { player, zone });
        self.set_phase(
            player,
            SessionPhase::Jigging {
                landing,
                zone,
                equipment,
                jig: JigState::new(),
                token,
            },
        );
    }

    fn finish_jig<H: FishingHost, R: Rng>(
        &mut self,
        player: PlayerId,
        host: &mut H,
        rng: &mut R,
        events: &mut Vec<FishingEvent>,
    ) {
        let Some(phase) = self.take_phase(player) else {
            return;
        };
        let SessionPhase::Jigging {
            zone, equipment, ..
        } = phase
        else {
            self.set_phase(player, phase);
            return;
        };

        match self.resolve_bite(player, zone, &equipment, host, rng, events) {
            Ok(next) => self.set_phase(player, next),
            Err(err) => {
                warn!(%player, ?zone, error = %err, "catch resolution failed");
                events.push(FishingEvent::ResolutionFailed {
                    player,
                    reason: err.to_string(),
                });
            }
        }
    }

    fn resolve_bite<H: FishingHost, R: Rng>(
        &self,
        player: PlayerId,
        zone_id: ZoneId,
        equipment: &EquipmentSnapshot,
        host: &mut H,
        rng: &mut R,
        events: &mut Vec<FishingEvent>,
    ) -> Result<SessionPhase> {
        let profile = host.profile(player);
        let zone = self.catalog.zones().zone(zone_id)?;
        let outcome = roll_outcome(
            &self.catalog,
            &self.config,
            zone,
            &profile,
            equipment,
            host.now(),
            rng,
        )?;

        if outcome.consumes_bait() {
            if let Some(bait) = &equipment.bait {
                host.consume_bait(player, &bait.item_id);
            }
        }

        let message = outcome.message();
        let next = match outcome {
            CatchOutcome::Fish(fish) => {
                let species = self.catalog.species(fish.species)?;
                let session = start_reeling(fish, species, equipment, &profile, rng);
                let pattern = session.pattern();
                host.send_ui_event(
                    player,
                    UiEvent::ReelStarted {
                        species: session.fish.species,
                        pattern,
                    },
                );
                events.push(FishingEvent::Hooked {
                    player,
                    species: session.fish.species,
                    tier: session.fish.tier,
                    pattern,
                });
                SessionPhase::Reeling {
                    session: Box::new(session),
                    zone: zone_id,
                }
            }
            CatchOutcome::Loot(item) => {
                dispatch_loot(host, player, item.clone());
                events.push(FishingEvent::Loot { player, item });
                SessionPhase::Idle
            }
            CatchOutcome::TooHeavy {
                species, weight, ..
            } => {
                debug!(%player, ?species, weight, "fish too heavy");
                if let Some(message) = message {
                    host.send_ui_event(player, UiEvent::Message(message));
                }
                events.push(FishingEvent::TooHeavy {
                    player,
                    species,
                    weight,
                });
                SessionPhase::Idle
            }
            CatchOutcome::NoBite => {
                debug!(%player, zone = ?zone_id, "no bite");
                if let Some(message) = message {
                    host.send_ui_event(player, UiEvent::Message(message));
                }
                events.push(FishingEvent::NoBite {
                    player,
                    zone: zone_id,
                });
                SessionPhase::Idle
            }
        };
        Ok(next)
    }

    fn land_fish<H: FishingHost>(
        &self,
        player: PlayerId,
        session: ReelingSession,
        zone_id: ZoneId,
        host: &mut H,
        events: &mut Vec<FishingEvent>,
    ) {
        let zone = self
            .catalog
            .zones()
            .zone(zone_id)
            .unwrap_or_else(|_| self.catalog.zones().fallback());
        let ticks = session.ticks;
        let fish = session.fish;
        let xp = dispatch_catch(host, player, fish.clone(), zone);
        events.push(FishingEvent::Caught {
            player,
            fish,
            zone: zone_id,
            xp,
            ticks,
        });
    }
}
