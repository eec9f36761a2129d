//! Session state machine integration tests
//!
//! Drives `FishingSystem` tick by tick against the in-memory host:
//! - Cast charging and release
//! - Line travel and jig timers
//! - Aborts, recasts and rejected casts
//! - Reeling to a catch or an escape

mod common;

use common::*;
use reelcast::catalog::{default_loot, default_species, Catalog, Rarity, SpeciesId};
use reelcast::equipment::RodStats;
use reelcast::host::{Block, RewardItem, UiEvent};
use reelcast::session::PhaseKind;
use reelcast::zones::{ZoneId, ZoneTable};
use reelcast::{FishingConfig, FishingEvent, FishingSystem, PlayerId, PlayerProfile};

fn setup() -> (FishingSystem, FakeHost, PlayerId) {
    let mut system = FishingSystem::default();
    let player = PlayerId::new();
    system.join(player);
    (system, FakeHost::lake(), player)
}

// ============================================================================
// Casting
// ============================================================================

#[test]
fn test_cast_power_charges_and_wraps() {
    let (mut system, mut host, player) = setup();
    let mut rng = create_test_rng();

    let events = step(&mut system, &mut host, player, toggle(), &mut rng);
    assert_eq!(events, vec![FishingEvent::CastStarted { player }]);
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Casting);

    for _ in 0..60 {
        step(&mut system, &mut host, player, idle(), &mut rng);
    }

    let powers = host.cast_powers();
    // Start at 0, then 60 charge ticks
    assert_eq!(powers.len(), 61);
    assert_eq!(powers[0], 0.0);
    assert_eq!(powers[1], 2.0);
    assert_eq!(powers[49], 98.0);
    assert_eq!(powers[50], 0.0);
    assert_eq!(powers[51], 2.0);
    assert!(powers.iter().all(|p| *p < 100.0));
}

#[test]
fn test_no_rod_cast_is_noop() {
    let (mut system, mut host, player) = setup();
    host.rod = None;
    let mut rng = create_test_rng();

    let events = step(&mut system, &mut host, player, toggle(), &mut rng);

    assert!(events.is_empty());
    assert!(host.ui.is_empty());
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Idle);
}

#[test]
fn test_cast_onto_solid_ground_fails() {
    let (mut system, mut host, player) = setup();
    host.surface = Block::Solid;
    let mut rng = create_test_rng();

    let events = cast(&mut system, &mut host, player, 5, &mut rng);

    assert!(events
        .iter()
        .any(|e| matches!(e, FishingEvent::CastFailed { power, .. } if *power == 10.0)));
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Idle);
    assert_eq!(system.pending_timers(), 0);
    assert!(!host
        .ui
        .iter()
        .any(|e| matches!(e, UiEvent::MarkerSpawned { .. })));
}

#[test]
fn test_cast_travels_then_jigs() {
    let (mut system, mut host, player) = setup();
    let mut rng = create_test_rng();

    let events = cast(&mut system, &mut host, player, 5, &mut rng);
    let released_at = system.current_tick();
    assert!(events
        .iter()
        .any(|e| matches!(e, FishingEvent::CastReleased { power, .. } if *power == 10.0)));
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Traveling);
    assert_eq!(system.session(player).unwrap().casts, 1);

    let events = wait_out(
        &mut system,
        &mut host,
        player,
        PhaseKind::Traveling,
        1000,
        &mut rng,
    );
    assert_eq!(system.current_tick() - released_at, 40);
    assert_eq!(
        events,
        vec![FishingEvent::Landed {
            player,
            zone: ZoneId::StarterPond
        }]
    );
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Jigging);
    assert!(host
        .ui
        .iter()
        .any(|e| matches!(e, UiEvent::MarkerSpawned { .. })));
}

#[test]
fn test_jig_input_only_moves_the_bobber() {
    let (mut system, mut host, player) = setup();
    let mut rng = create_test_rng();
    cast(&mut system, &mut host, player, 5, &mut rng);
    wait_out(&mut system, &mut host, player, PhaseKind::Traveling, 1000, &mut rng);

    let jig = reelcast::TickInput { jig: true, ..idle() };
    for _ in 0..10 {
        step(&mut system, &mut host, player, jig, &mut rng);
    }

    let depths: Vec<f64> = host
        .ui
        .iter()
        .filter_map(|e| match e {
            UiEvent::JigDepth { depth } => Some(*depth),
            _ => None,
        })
        .collect();
    assert_eq!(depths.len(), 10);
    assert!(depths.iter().all(|d| (0.0..=2.0).contains(d)));
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Jigging);
}

// ============================================================================
// Aborts and recasts
// ============================================================================

#[test]
fn test_movement_while_jigging_cancels_bite() {
    let (mut system, mut host, player) = setup();
    host.bait = Some(worm());
    let mut rng = create_test_rng();
    cast(&mut system, &mut host, player, 5, &mut rng);
    wait_out(&mut system, &mut host, player, PhaseKind::Traveling, 1000, &mut rng);
    assert_eq!(system.pending_timers(), 1);

    let events = step(&mut system, &mut host, player, walking(), &mut rng);
    assert_eq!(
        events,
        vec![FishingEvent::Aborted {
            player,
            phase: PhaseKind::Jigging
        }]
    );
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Idle);
    assert_eq!(system.pending_timers(), 0);

    // Run well past when the bite would have resolved
    for _ in 0..200 {
        assert!(step(&mut system, &mut host, player, idle(), &mut rng).is_empty());
    }
    assert!(host.consumed.is_empty());
    assert!(host.messages().is_empty());
}

#[test]
fn test_movement_while_idle_does_nothing() {
    let (mut system, mut host, player) = setup();
    let mut rng = create_test_rng();
    let moving_cast = reelcast::TickInput {
        cast_toggle: true,
        ..walking()
    };

    assert!(step(&mut system, &mut host, player, moving_cast, &mut rng).is_empty());
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Idle);
}

#[test]
fn test_recast_while_traveling_restarts_charge() {
    let (mut system, mut host, player) = setup();
    let mut rng = create_test_rng();
    cast(&mut system, &mut host, player, 5, &mut rng);
    assert_eq!(system.pending_timers(), 1);

    let events = step(&mut system, &mut host, player, toggle(), &mut rng);
    assert_eq!(events, vec![FishingEvent::CastStarted { player }]);
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Casting);
    assert_eq!(system.pending_timers(), 0);
}

#[test]
fn test_recast_while_jigging_restarts_charge() {
    let (mut system, mut host, player) = setup();
    let mut rng = create_test_rng();
    cast(&mut system, &mut host, player, 5, &mut rng);
    wait_out(&mut system, &mut host, player, PhaseKind::Traveling, 1000, &mut rng);

    let events = step(&mut system, &mut host, player, toggle(), &mut rng);
    assert_eq!(events, vec![FishingEvent::CastStarted { player }]);
    assert_eq!(system.pending_timers(), 0);

    // The cancelled jig timer never resolves a bite
    for _ in 0..200 {
        let events = step(&mut system, &mut host, player, idle(), &mut rng);
        assert!(!events
            .iter()
            .any(|e| matches!(e, FishingEvent::Hooked { .. })));
    }
}

#[test]
fn test_leave_cancels_pending_timer() {
    let (mut system, mut host, player) = setup();
    let mut rng = create_test_rng();
    cast(&mut system, &mut host, player, 5, &mut rng);

    system.leave(player).unwrap();
    assert_eq!(system.pending_timers(), 0);
    for _ in 0..200 {
        assert!(step(&mut system, &mut host, player, idle(), &mut rng).is_empty());
    }
}

#[test]
fn test_unknown_player_input_is_ignored() {
    let (mut system, mut host, _player) = setup();
    let mut rng = create_test_rng();
    let stranger = PlayerId::new();

    assert!(step(&mut system, &mut host, stranger, toggle(), &mut rng).is_empty());
    assert!(system.phase(stranger).is_err());
}

// ============================================================================
// Bite and reel
// ============================================================================

#[test]
fn test_beginner_lands_guaranteed_bluegill() {
    let (mut system, mut host, player) = setup();
    host.bait = Some(sticky_bait());
    let mut rng = create_test_rng();

    let events = cast_and_wait(&mut system, &mut host, player, &mut rng);
    assert!(events.iter().any(|e| matches!(
        e,
        FishingEvent::Hooked {
            species: SpeciesId::Bluegill,
            ..
        }
    )));
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Reeling);
    assert_eq!(host.consumed, vec!["sticky_dough"]);
    assert!(host
        .ui
        .iter()
        .any(|e| matches!(e, UiEvent::ReelStarted { species: SpeciesId::Bluegill, .. })));

    let events = reel_perfectly(&mut system, &mut host, player, &mut rng);
    let caught = events
        .iter()
        .find_map(|e| match e {
            FishingEvent::Caught {
                fish, xp, ticks, zone, ..
            } => Some((fish.clone(), *xp, *ticks, *zone)),
            _ => None,
        })
        .expect("a perfectly reeled fish is landed");

    let (fish, xp, ticks, zone) = caught;
    assert_eq!(ticks, 150);
    assert_eq!(zone, ZoneId::StarterPond);
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Idle);
    assert_eq!(host.xp, xp);
    assert_eq!(host.items, vec![RewardItem::Fish(fish.clone())]);
    assert_eq!(host.records.len(), 1);
    assert_eq!(host.records[0].location, "Starter Pond");
    assert_eq!(host.records[0].species, SpeciesId::Bluegill);
    assert_eq!(fish.caught_at, host.now);
    // The renderer sees the full bar on the landing tick
    assert_eq!(host.last_snapshot().map(|(_, _, progress)| progress), Some(100.0));
    assert!(host
        .messages()
        .last()
        .unwrap()
        .starts_with("You caught a"));
}

#[test]
fn test_reel_snapshots_stay_in_bounds() {
    let (mut system, mut host, player) = setup();
    let mut rng = create_test_rng();
    cast_and_wait(&mut system, &mut host, player, &mut rng);

    for tick in 0..3000 {
        if system.phase(player).unwrap() != PhaseKind::Reeling {
            break;
        }
        step(&mut system, &mut host, player, holding(tick % 3 == 0), &mut rng);
        if let Some((marker, bar, progress)) = host.last_snapshot() {
            assert!((0.0..=1.0).contains(&marker));
            assert!((0.0..=0.8).contains(&bar));
            assert!((0.0..=100.0).contains(&progress));
        }
    }
}

#[test]
fn test_letting_go_lets_the_fish_escape() {
    let (mut system, mut host, player) = setup();
    let mut rng = create_test_rng();
    cast_and_wait(&mut system, &mut host, player, &mut rng);
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Reeling);

    let mut escaped = false;
    for _ in 0..10_000 {
        let events = step(&mut system, &mut host, player, holding(false), &mut rng);
        if events
            .iter()
            .any(|e| matches!(e, FishingEvent::Escaped { .. }))
        {
            escaped = true;
            break;
        }
    }

    assert!(escaped);
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Idle);
    assert!(host.items.is_empty());
    assert_eq!(host.xp, 0);
    assert_eq!(host.messages().last(), Some(&"The Bluegill got away!"));
    assert_eq!(host.last_snapshot().map(|(_, _, progress)| progress), Some(0.0));
}

#[test]
fn test_cast_rejected_while_reeling() {
    let (mut system, mut host, player) = setup();
    let mut rng = create_test_rng();
    cast_and_wait(&mut system, &mut host, player, &mut rng);

    step(&mut system, &mut host, player, holding(false), &mut rng);
    let before = system.session(player).unwrap().phase.reel().unwrap().ticks;

    let events = step(&mut system, &mut host, player, toggle(), &mut rng);
    assert!(events.contains(&FishingEvent::CastRejected { player }));
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Reeling);
    let after = system.session(player).unwrap().phase.reel().unwrap().ticks;
    assert_eq!(after, before + 1);
}

#[test]
fn test_walking_away_from_reel_gives_nothing() {
    let (mut system, mut host, player) = setup();
    let mut rng = create_test_rng();
    cast_and_wait(&mut system, &mut host, player, &mut rng);
    let messages_before = host.messages().len();

    let events = step(&mut system, &mut host, player, walking(), &mut rng);
    assert_eq!(
        events,
        vec![FishingEvent::Aborted {
            player,
            phase: PhaseKind::Reeling
        }]
    );
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Idle);
    assert!(host.items.is_empty());
    assert_eq!(host.xp, 0);
    assert_eq!(host.messages().len(), messages_before);
}

#[test]
fn test_veteran_bites_vary_and_consume_bait() {
    let (mut system, mut host, player) = setup();
    host.profile = PlayerProfile::new(20, 500);
    host.bait = Some(worm());
    let mut rng = create_test_rng();

    let mut species = std::collections::HashSet::new();
    for _ in 0..40 {
        let events = cast_and_wait(&mut system, &mut host, player, &mut rng);
        for event in &events {
            if let FishingEvent::Hooked { species: id, tier, .. } = event {
                species.insert(*id);
                assert!(Rarity::ALL.contains(tier));
            }
        }
        // Drop any hooked fish and go again
        step(&mut system, &mut host, player, walking(), &mut rng);
    }

    assert!(species.len() > 1);
    assert!(!host.consumed.is_empty());
    assert!(host.consumed.iter().all(|id| id == "worm"));
}

#[test]
fn test_slow_config_stretches_timers() {
    let config = FishingConfig {
        cast_travel_secs: 3.0,
        jig_duration_secs: 1.0,
        ..FishingConfig::default()
    };
    let mut system = FishingSystem::new(config, Default::default()).unwrap();
    let mut host = FakeHost::lake();
    let player = PlayerId::new();
    system.join(player);
    let mut rng = create_test_rng();

    cast(&mut system, &mut host, player, 5, &mut rng);
    let released = system.current_tick();
    wait_out(&mut system, &mut host, player, PhaseKind::Traveling, 1000, &mut rng);
    assert_eq!(system.current_tick() - released, 60);
    wait_out(&mut system, &mut host, player, PhaseKind::Jigging, 1000, &mut rng);
    assert_eq!(system.current_tick() - released, 80);
}

// ============================================================================
// Bites that end the session
// ============================================================================

#[test]
fn test_too_heavy_snaps_line_and_uses_bait() {
    let (mut system, mut host, player) = setup();
    // Past the beginner override; every starter pond fish outweighs 10 grams
    host.profile = PlayerProfile::new(5, 0);
    host.rod = Some(RodStats {
        id: "twig".to_string(),
        max_distance: 20.0,
        max_catch_weight: 0.01,
        luck: 1.0,
    });
    host.bait = Some(worm());
    let mut rng = create_test_rng();

    let mut snapped = false;
    for _ in 0..30 {
        host.consumed.clear();
        host.ui.clear();
        let events = cast_and_wait(&mut system, &mut host, player, &mut rng);
        if events
            .iter()
            .any(|e| matches!(e, FishingEvent::TooHeavy { weight, .. } if *weight > 0.01))
        {
            snapped = true;
            break;
        }
    }

    assert!(snapped);
    assert_eq!(host.consumed, vec!["worm"]);
    assert!(host
        .messages()
        .iter()
        .any(|m| m.contains("too heavy for your rod")));
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Idle);
    assert!(host.items.iter().all(|item| !matches!(item, RewardItem::Fish(_))));
    assert!(host.records.is_empty());
}

#[test]
fn test_empty_pond_gives_no_bite_and_keeps_bait() {
    // Nothing in this catalog is on the starter pond's allow list
    let species = default_species()
        .into_iter()
        .filter(|s| s.id == SpeciesId::Tuna)
        .collect();
    let catalog = Catalog::new(species, default_loot(), ZoneTable::default()).unwrap();
    let mut system = FishingSystem::new(FishingConfig::default(), catalog).unwrap();
    let mut host = FakeHost::lake();
    host.profile = PlayerProfile::new(30, 0);
    host.bait = Some(worm());
    let player = PlayerId::new();
    system.join(player);
    let mut rng = create_test_rng();

    let events = cast_and_wait(&mut system, &mut host, player, &mut rng);

    assert!(events.contains(&FishingEvent::NoBite {
        player,
        zone: ZoneId::StarterPond
    }));
    assert!(host.consumed.is_empty());
    assert_eq!(host.messages(), vec!["Nothing is biting..."]);
    assert_eq!(system.phase(player).unwrap(), PhaseKind::Idle);
}
