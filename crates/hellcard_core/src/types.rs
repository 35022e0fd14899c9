use serde::{Deserialize, Serialize};

use crate::class::ClassTag;

/// Which of the two save layouts to decode. The layouts are not
/// self-describing; the caller knows which directory the file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveFormat {
    SinglePlayer,
    MultiPlayer,
}

/// Declared order of the max/current HP pair in a character record.
/// Different revisions of the game swapped these, so the caller picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HpOrder {
    #[default]
    MaxThenCurrent,
    CurrentThenMax,
}

/// What to do with a record whose class tag is not mag/war/rog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TagPolicy {
    /// Drop the record from the result but keep decoding; the drop is
    /// reported in `SaveFile::issues`. Matches the original tool.
    #[default]
    DropRecord,
    /// Fail the whole decode with `DecodeError::UnrecognizedClassTag`.
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeOptions {
    pub hp_order: HpOrder,
    pub tag_policy: TagPolicy,
}

/// A record that was present in the file but dropped from the result
/// under `TagPolicy::DropRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordIssue {
    pub position: u8,
    pub tag: String,
}

/// A companion nested inside a single-player character record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionRecord {
    pub name: String,
    pub floor: i32,
    pub level: i32,
    pub max_hp: i32,
    pub current_hp: i32,
    pub max_mana: i32,
    pub mana: i32,
    pub card_ids: Vec<i32>,
    /// Cards not yet drawn; a second, separately length-prefixed sequence.
    pub future_card_ids: Vec<i32>,
}

/// One of the three fixed character slots in a save file.
///
/// `position` is the record's 1-based physical order in the file. It is a
/// function of scan order only and has no relation to the class tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub class: ClassTag,
    pub name: String,
    pub position: u8,
    pub floor: i32,
    pub max_hp: i32,
    pub current_hp: i32,
    pub gold: i32,
    pub card_ids: Vec<i32>,
    /// Single-player only.
    pub slots: Option<i32>,
    /// Single-player only.
    pub level: Option<i32>,
    /// Single-player only; empty for multiplayer saves.
    pub companions: Vec<CompanionRecord>,
}

/// A fully decoded save file. Never mutated in place; edits go through the
/// patcher and produce a new `SaveFile` from a new decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    /// The raw bytes this save was decoded from.
    #[serde(skip)]
    pub source: Vec<u8>,
    pub format: SaveFormat,
    pub mage: Option<CharacterRecord>,
    pub warrior: Option<CharacterRecord>,
    pub rogue: Option<CharacterRecord>,
    /// Records dropped under the lenient tag policy.
    pub issues: Vec<RecordIssue>,
}

impl SaveFile {
    /// The record that was read at the given 1-based physical position,
    /// if it landed in one of the three class slots.
    pub fn record_at(&self, position: u8) -> Option<&CharacterRecord> {
        self.records().find(|record| record.position == position)
    }

    /// Present records in slot order (mage, warrior, rogue).
    pub fn records(&self) -> impl Iterator<Item = &CharacterRecord> {
        [&self.mage, &self.warrior, &self.rogue]
            .into_iter()
            .flatten()
    }
}
