use std::io::{self, Cursor};

use crate::class::ClassTag;
use crate::error::DecodeError;
use crate::reader::LittleEndianReader;
use crate::types::{
    CharacterRecord, CompanionRecord, DecodeOptions, HpOrder, RecordIssue, SaveFile, SaveFormat,
    TagPolicy,
};

// Opaque version/magic prefix; never interpreted.
pub(crate) const HEADER_LEN: u64 = 9;
pub(crate) const CLASS_TAG_LEN: usize = 3;
pub(crate) const INT_WIDTH: u64 = 4;

type Reader<'a> = LittleEndianReader<Cursor<&'a [u8]>>;

impl SaveFile {
    /// Decode a save buffer. The layout is not self-describing, so the
    /// caller supplies the format matching the directory the file was
    /// found in.
    pub fn decode(
        bytes: &[u8],
        format: SaveFormat,
        options: DecodeOptions,
    ) -> Result<SaveFile, DecodeError> {
        decode(bytes, format, options)
    }
}

/// Pure forward scan over `bytes`, no backtracking. Exactly three character
/// records follow the header; `position` is assigned 1, 2, 3 in read order
/// and is unrelated to class.
pub fn decode(
    bytes: &[u8],
    format: SaveFormat,
    options: DecodeOptions,
) -> Result<SaveFile, DecodeError> {
    let mut r = LittleEndianReader::new(Cursor::new(bytes));
    r.skip(HEADER_LEN).map_err(io_to_decode)?;

    let mut save = SaveFile {
        source: bytes.to_vec(),
        format,
        mage: None,
        warrior: None,
        rogue: None,
        issues: Vec::new(),
    };

    for position in 1..=3u8 {
        let record = read_character(&mut r, format, position, options)?;
        if record.class.is_recognized() {
            match record.class {
                ClassTag::Mage => save.mage = Some(record),
                ClassTag::Warrior => save.warrior = Some(record),
                ClassTag::Rogue => save.rogue = Some(record),
                ClassTag::Unrecognized(_) => {}
            }
        } else {
            let tag = record.class.tag().to_string();
            match options.tag_policy {
                TagPolicy::Fail => return Err(DecodeError::UnrecognizedClassTag(tag)),
                TagPolicy::DropRecord => save.issues.push(RecordIssue { position, tag }),
            }
        }
    }

    Ok(save)
}

fn read_character(
    r: &mut Reader<'_>,
    format: SaveFormat,
    position: u8,
    options: DecodeOptions,
) -> Result<CharacterRecord, DecodeError> {
    let class = read_class_tag(r)?;
    let name = read_name(r)?;
    let floor = read_i32(r)?;
    let (max_hp, current_hp) = read_hp_pair(r, options.hp_order)?;
    let gold = read_i32(r)?;

    let (card_ids, slots, level, companions) = match format {
        SaveFormat::MultiPlayer => {
            // 4 reserved ints between gold and the card count.
            skip_ints(r, 4)?;
            let card_ids = read_card_list(r)?;
            // Trailing reserved int.
            skip_ints(r, 1)?;
            (card_ids, None, None, Vec::new())
        }
        SaveFormat::SinglePlayer => {
            let slots = read_i32(r)?;
            let level = read_i32(r)?;
            // 2 reserved ints between level and the card count.
            skip_ints(r, 2)?;
            let card_ids = read_card_list(r)?;
            let companion_count = read_count(r)?;
            // Reserved int between the companion count and the first companion.
            skip_ints(r, 1)?;
            let mut companions = Vec::new();
            for _ in 0..companion_count {
                companions.push(read_companion(r)?);
            }
            (card_ids, Some(slots), Some(level), companions)
        }
    };

    Ok(CharacterRecord {
        class,
        name,
        position,
        floor,
        max_hp,
        current_hp,
        gold,
        card_ids,
        slots,
        level,
        companions,
    })
}

fn read_companion(r: &mut Reader<'_>) -> Result<CompanionRecord, DecodeError> {
    // Reserved int (id).
    skip_ints(r, 1)?;
    let name = read_name(r)?;
    let floor = read_i32(r)?;
    // Reserved int (type).
    skip_ints(r, 1)?;
    let level = read_i32(r)?;
    let max_hp = read_i32(r)?;
    let current_hp = read_i32(r)?;
    let max_mana = read_i32(r)?;
    let mana = read_i32(r)?;
    // 6 reserved ints.
    skip_ints(r, 6)?;
    let card_ids = read_card_list(r)?;
    let future_card_ids = read_card_list(r)?;
    // Trailing reserved int.
    skip_ints(r, 1)?;

    Ok(CompanionRecord {
        name,
        floor,
        level,
        max_hp,
        current_hp,
        max_mana,
        mana,
        card_ids,
        future_card_ids,
    })
}

fn read_class_tag(r: &mut Reader<'_>) -> Result<ClassTag, DecodeError> {
    let bytes = r.read_bytes(CLASS_TAG_LEN).map_err(io_to_decode)?;
    // Garbage tag bytes are an unrecognized tag, not an encoding error;
    // the tag policy decides what happens to the record.
    Ok(ClassTag::from_tag(&String::from_utf8_lossy(&bytes)))
}

fn read_name(r: &mut Reader<'_>) -> Result<String, DecodeError> {
    let len = read_count(r)?;
    let bytes = r.read_bytes(len).map_err(io_to_decode)?;
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidEncoding)
}

fn read_hp_pair(r: &mut Reader<'_>, order: HpOrder) -> Result<(i32, i32), DecodeError> {
    let first = read_i32(r)?;
    let second = read_i32(r)?;
    Ok(match order {
        HpOrder::MaxThenCurrent => (first, second),
        HpOrder::CurrentThenMax => (second, first),
    })
}

fn read_card_list(r: &mut Reader<'_>) -> Result<Vec<i32>, DecodeError> {
    let count = read_count(r)?;
    // Reject counts the remaining bytes cannot satisfy before allocating.
    if (count as u64) * INT_WIDTH > r.remaining().map_err(io_to_decode)? {
        return Err(DecodeError::Truncated);
    }
    r.read_i32_vec(count).map_err(io_to_decode)
}

/// A length prefix. Negative values can never be satisfied and leave the
/// cursor position meaningless, so they abort like a short read.
fn read_count(r: &mut Reader<'_>) -> Result<usize, DecodeError> {
    let raw = read_i32(r)?;
    if raw < 0 {
        return Err(DecodeError::Truncated);
    }
    Ok(raw as usize)
}

fn read_i32(r: &mut Reader<'_>) -> Result<i32, DecodeError> {
    r.read_i32().map_err(io_to_decode)
}

fn skip_ints(r: &mut Reader<'_>, n: u64) -> Result<(), DecodeError> {
    r.skip(n * INT_WIDTH).map_err(io_to_decode)
}

fn io_to_decode(_: io::Error) -> DecodeError {
    // The only failure an in-memory cursor produces is a short read.
    DecodeError::Truncated
}
