//! Card ID → display name table for the demo's card pool.
//!
//! Purely presentational: the codec round-trips card IDs without caring
//! what they mean. IDs 0x00..=0x1D are the pool observed in demo saves.

struct Card {
    id: i32,
    name: &'static str,
}

#[rustfmt::skip]
const CARDS: &[Card] = &[
    Card { id: 0x00, name: "Block" },
    Card { id: 0x01, name: "Strike" },
    Card { id: 0x02, name: "Mighty Blow" },
    Card { id: 0x03, name: "Caltrops" },
    Card { id: 0x04, name: "Cluster" },
    Card { id: 0x05, name: "Tactics" },
    Card { id: 0x06, name: "Whirlwind" },
    Card { id: 0x07, name: "Defiant Roar" },
    Card { id: 0x08, name: "Rampage" },
    Card { id: 0x09, name: "Barricade" },
    Card { id: 0x0A, name: "Sacrifice" },
    Card { id: 0x0B, name: "Arrow" },
    Card { id: 0x0C, name: "Quiver" },
    Card { id: 0x0D, name: "Finesse" },
    Card { id: 0x0E, name: "Arrow Rain" },
    Card { id: 0x0F, name: "Mastery" },
    Card { id: 0x10, name: "Fortify" },
    Card { id: 0x11, name: "Cover" },
    Card { id: 0x12, name: "Knockback" },
    Card { id: 0x13, name: "Luck" },
    Card { id: 0x14, name: "Missile" },
    Card { id: 0x15, name: "Lightning" },
    Card { id: 0x16, name: "Meditation" },
    Card { id: 0x17, name: "Armageddon" },
    Card { id: 0x18, name: "Dark Pact" },
    Card { id: 0x19, name: "Teleport" },
    Card { id: 0x1A, name: "Healing Aura" },
    Card { id: 0x1B, name: "Link" },
    Card { id: 0x1C, name: "Meteor" },
    Card { id: 0x1D, name: "Initiative" },
];

/// Look up a card's display name. Unknown IDs return `None`; presentation
/// code substitutes a placeholder.
pub fn card_name(id: i32) -> Option<&'static str> {
    CARDS.iter().find(|card| card.id == id).map(|card| card.name)
}
