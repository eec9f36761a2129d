//! Pushes catch results out to the host: inventory, XP, catch log and chat.

use tracing::info;

use crate::catalog::LootItem;
use crate::core::constants::{LOOT_XP, TIER_XP, VALUE_XP_DIVISOR};
use crate::core::types::PlayerId;
use crate::fishing::CaughtFish;
use crate::host::{CatchRecord, CatchRecorder, Inventory, Progression, RewardItem, UiEvent, UiSink};
use crate::zones::Zone;

/// XP for landing a fish: a flat amount per tier plus a tenth of its value.
pub fn catch_xp(fish: &CaughtFish) -> u64 {
    TIER_XP[fish.tier.index()] + fish.value as u64 / VALUE_XP_DIVISOR
}

pub fn catch_message(fish: &CaughtFish, xp: u64) -> String {
    format!(
        "You caught a {} {} ({:.2} kg, {} coins)! +{} XP",
        fish.tier.name(),
        fish.name,
        fish.weight,
        fish.value,
        xp
    )
}

pub fn escape_message(fish: &CaughtFish) -> String {
    format!("The {} got away!", fish.name)
}

/// Grants a landed fish. Returns the XP awarded.
pub fn dispatch_catch<H>(host: &mut H, player: PlayerId, fish: CaughtFish, zone: &Zone) -> u64
where
    H: Inventory + Progression + CatchRecorder + UiSink,
{
    let xp = catch_xp(&fish);
    let record = CatchRecord {
        species: fish.species,
        tier: fish.tier,
        weight: fish.weight,
        value: fish.value,
        location: zone.name.clone(),
    };
    let message = catch_message(&fish, xp);

    info!(
        %player,
        species = %fish.name,
        tier = fish.tier.name(),
        weight = fish.weight,
        value = fish.value,
        zone = %zone.name,
        "fish landed"
    );

    host.record_catch(player, &record);
    host.add_item(player, RewardItem::Fish(fish));
    host.add_xp(player, xp);
    host.send_ui_event(player, UiEvent::Message(message));
    xp
}

/// Grants loot pulled up instead of a fish. Returns the XP awarded.
pub fn dispatch_loot<H>(host: &mut H, player: PlayerId, item: LootItem) -> u64
where
    H: Inventory + Progression + UiSink,
{
    let message = format!("You fished up: {}!", item.name);
    info!(%player, item = %item.name, value = item.value, "loot fished up");

    host.add_item(player, RewardItem::Loot(item));
    host.add_xp(player, LOOT_XP);
    host.send_ui_event(player, UiEvent::Message(message));
    LOOT_XP
}

pub fn dispatch_escape(host: &mut impl UiSink, player: PlayerId, fish: &CaughtFish) {
    info!(%player, species = %fish.name, "fish escaped");
    host.send_ui_event(player, UiEvent::Message(escape_message(fish)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LootId, Rarity, SpeciesId};
    use crate::core::types::PlayerProfile;
    use crate::equipment::{BaitStats, RodStats};
    use crate::zones::ZoneTable;
    use chrono::Utc;

    #[derive(Default)]
    struct Sink {
        items: Vec<RewardItem>,
        xp: u64,
        records: Vec<CatchRecord>,
        messages: Vec<String>,
    }

    impl Inventory for Sink {
        fn equipped_rod(&self, _player: PlayerId) -> Option<RodStats> {
            None
        }
        fn equipped_bait(&self, _player: PlayerId) -> Option<BaitStats> {
            None
        }
        fn consume_bait(&mut self, _player: PlayerId, _item_id: &str) {}
        fn add_item(&mut self, _player: PlayerId, item: RewardItem) {
            self.items.push(item);
        }
    }

    impl Progression for Sink {
        fn profile(&self, _player: PlayerId) -> PlayerProfile {
            PlayerProfile::default()
        }
        fn add_xp(&mut self, _player: PlayerId, amount: u64) {
            self.xp += amount;
        }
    }

    impl CatchRecorder for Sink {
        fn record_catch(&mut self, _player: PlayerId, record: &CatchRecord) {
            self.records.push(record.clone());
        }
    }

    impl UiSink for Sink {
        fn send_ui_event(&mut self, _player: PlayerId, event: UiEvent) {
            if let UiEvent::Message(message) = event {
                self.messages.push(message);
            }
        }
    }

    fn fish(tier: Rarity, value: u32) -> CaughtFish {
        CaughtFish {
            id: "perch-0-000001".to_string(),
            species: SpeciesId::Perch,
            name: "Perch".to_string(),
            tier,
            weight: 1.1,
            value,
            caught_at: Utc::now(),
        }
    }

    #[test]
    fn test_catch_xp_by_tier_and_value() {
        assert_eq!(catch_xp(&fish(Rarity::Common, 9)), 10);
        assert_eq!(catch_xp(&fish(Rarity::Epic, 125)), 92);
        assert_eq!(catch_xp(&fish(Rarity::Legendary, 245)), 184);
    }

    #[test]
    fn test_dispatch_catch_fills_every_sink() {
        let zones = ZoneTable::default();
        let zone = zones.resolve(glam::DVec3::new(0.0, 62.0, 0.0));
        let mut sink = Sink::default();
        let player = PlayerId::new();

        let xp = dispatch_catch(&mut sink, player, fish(Rarity::Rare, 40), zone);

        assert_eq!(xp, 44);
        assert_eq!(sink.xp, 44);
        assert_eq!(sink.items.len(), 1);
        assert_eq!(sink.records.len(), 1);
        assert_eq!(sink.records[0].location, zone.name);
        assert_eq!(sink.records[0].tier, Rarity::Rare);
        assert!(sink.messages[0].starts_with("You caught a Rare Perch"));
    }

    #[test]
    fn test_loot_and_escape() {
        let mut sink = Sink::default();
        let player = PlayerId::new();
        let boot = LootItem {
            id: LootId::OldBoot,
            name: "Old Boot".to_string(),
            value: 1,
        };

        assert_eq!(dispatch_loot(&mut sink, player, boot), LOOT_XP);
        dispatch_escape(&mut sink, player, &fish(Rarity::Common, 3));

        assert_eq!(sink.xp, LOOT_XP);
        assert!(sink.records.is_empty());
        assert_eq!(
            sink.messages,
            vec!["You fished up: Old Boot!", "The Perch got away!"]
        );
    }
}
