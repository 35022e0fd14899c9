use std::collections::BTreeMap;
use std::fmt::Write as _;

use hellcard_core::catalog;
use hellcard_core::{CharacterRecord, CompanionRecord, SaveFile, SaveFormat};
use serde_json::{Map as JsonMap, Value as JsonValue};

const SLOT_LABELS: [&str; 3] = ["Mage", "Warrior", "Rogue"];

/// Summarize a card sequence as counted display names, grouped by ID in
/// ascending order: `"1 Block, 2 Strike"`. IDs missing from the catalog
/// render as `"Card 0x2A"` placeholders.
pub fn card_summary(card_ids: &[i32]) -> String {
    if card_ids.is_empty() {
        return "none".to_string();
    }

    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for &id in card_ids {
        *counts.entry(id).or_insert(0) += 1;
    }

    let mut parts = Vec::with_capacity(counts.len());
    for (id, count) in counts {
        parts.push(format!("{} {}", count, card_label(id)));
    }
    parts.join(", ")
}

fn card_label(id: i32) -> String {
    match catalog::card_name(id) {
        Some(name) => name.to_string(),
        None => format!("Card {:#04X}", id),
    }
}

/// Plain-text dump of a decoded save: one block per class slot, companions
/// indented under their character.
pub fn render_text(save: &SaveFile) -> String {
    let mut out = String::new();

    let format_label = match save.format {
        SaveFormat::SinglePlayer => "Single-player save",
        SaveFormat::MultiPlayer => "Multiplayer save",
    };
    writeln!(&mut out, "{format_label}").expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    let slots = [&save.mage, &save.warrior, &save.rogue];
    for (label, slot) in SLOT_LABELS.iter().zip(slots) {
        match slot {
            Some(record) => write_character(&mut out, label, record),
            None => {
                writeln!(&mut out, "{label}: none").expect("writing to String cannot fail")
            }
        }
    }

    for issue in &save.issues {
        writeln!(
            &mut out,
            "Dropped record at position {}: unrecognized class tag {:?}",
            issue.position, issue.tag
        )
        .expect("writing to String cannot fail");
    }

    out
}

fn write_character(out: &mut String, label: &str, record: &CharacterRecord) {
    writeln!(out, "{} (position {})", label, record.position)
        .expect("writing to String cannot fail");
    writeln!(
        out,
        "  {}:  Floor {}, {}/{}",
        record.name, record.floor, record.current_hp, record.max_hp
    )
    .expect("writing to String cannot fail");
    writeln!(out, "  Gold: {}", record.gold).expect("writing to String cannot fail");
    if let (Some(slots), Some(level)) = (record.slots, record.level) {
        writeln!(out, "  Level {}, {} slots", level, slots).expect("writing to String cannot fail");
    }
    writeln!(out, "  Cards: {}", card_summary(&record.card_ids))
        .expect("writing to String cannot fail");

    if !record.companions.is_empty() {
        writeln!(out, "  Companions:").expect("writing to String cannot fail");
        for companion in &record.companions {
            write_companion(out, companion);
        }
    }
}

fn write_companion(out: &mut String, companion: &CompanionRecord) {
    writeln!(
        out,
        "    {}:  Floor {}, {}/{}, mana {}/{}",
        companion.name,
        companion.floor,
        companion.current_hp,
        companion.max_hp,
        companion.mana,
        companion.max_mana
    )
    .expect("writing to String cannot fail");
    writeln!(out, "      Cards: {}", card_summary(&companion.card_ids))
        .expect("writing to String cannot fail");
    writeln!(
        out,
        "      Future cards: {}",
        card_summary(&companion.future_card_ids)
    )
    .expect("writing to String cannot fail");
}

/// Full structured dump of a decoded save.
pub fn render_json(save: &SaveFile) -> JsonValue {
    let mut out = JsonMap::new();

    out.insert(
        "format".to_string(),
        JsonValue::String(
            match save.format {
                SaveFormat::SinglePlayer => "SinglePlayer",
                SaveFormat::MultiPlayer => "MultiPlayer",
            }
            .to_string(),
        ),
    );

    let slots = [
        ("mage", &save.mage),
        ("warrior", &save.warrior),
        ("rogue", &save.rogue),
    ];
    for (key, slot) in slots {
        out.insert(
            key.to_string(),
            match slot {
                Some(record) => character_to_json(record),
                None => JsonValue::Null,
            },
        );
    }

    out.insert(
        "issues".to_string(),
        JsonValue::Array(
            save.issues
                .iter()
                .map(|issue| {
                    let mut m = JsonMap::new();
                    m.insert("position".to_string(), JsonValue::from(issue.position));
                    m.insert("tag".to_string(), JsonValue::String(issue.tag.clone()));
                    JsonValue::Object(m)
                })
                .collect(),
        ),
    );

    JsonValue::Object(out)
}

fn character_to_json(record: &CharacterRecord) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert(
        "class".to_string(),
        JsonValue::String(record.class.as_str().to_string()),
    );
    m.insert("name".to_string(), JsonValue::String(record.name.clone()));
    m.insert("position".to_string(), JsonValue::from(record.position));
    m.insert("floor".to_string(), JsonValue::from(record.floor));
    m.insert("max_hp".to_string(), JsonValue::from(record.max_hp));
    m.insert("current_hp".to_string(), JsonValue::from(record.current_hp));
    m.insert("gold".to_string(), JsonValue::from(record.gold));
    m.insert("cards".to_string(), cards_to_json(&record.card_ids));
    if let Some(slots) = record.slots {
        m.insert("slots".to_string(), JsonValue::from(slots));
    }
    if let Some(level) = record.level {
        m.insert("level".to_string(), JsonValue::from(level));
    }
    if record.slots.is_some() {
        m.insert(
            "companions".to_string(),
            JsonValue::Array(record.companions.iter().map(companion_to_json).collect()),
        );
    }
    JsonValue::Object(m)
}

fn companion_to_json(companion: &CompanionRecord) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert(
        "name".to_string(),
        JsonValue::String(companion.name.clone()),
    );
    m.insert("floor".to_string(), JsonValue::from(companion.floor));
    m.insert("level".to_string(), JsonValue::from(companion.level));
    m.insert("max_hp".to_string(), JsonValue::from(companion.max_hp));
    m.insert(
        "current_hp".to_string(),
        JsonValue::from(companion.current_hp),
    );
    m.insert("max_mana".to_string(), JsonValue::from(companion.max_mana));
    m.insert("mana".to_string(), JsonValue::from(companion.mana));
    m.insert("cards".to_string(), cards_to_json(&companion.card_ids));
    m.insert(
        "future_cards".to_string(),
        cards_to_json(&companion.future_card_ids),
    );
    JsonValue::Object(m)
}

fn cards_to_json(card_ids: &[i32]) -> JsonValue {
    JsonValue::Array(
        card_ids
            .iter()
            .map(|&id| {
                let mut m = JsonMap::new();
                m.insert("id".to_string(), JsonValue::from(id));
                match catalog::card_name(id) {
                    Some(name) => {
                        m.insert("name".to_string(), JsonValue::String(name.to_string()))
                    }
                    None => m.insert("name".to_string(), JsonValue::Null),
                };
                JsonValue::Object(m)
            })
            .collect(),
    )
}
