//! Structure-preserving rename patch.
//!
//! Large parts of the format are uninterpreted, so the only safe edit
//! strategy is copy-through with a single substitution: every byte outside
//! the targeted name field is carried over verbatim, in original order.
//! The walk below re-derives nothing but lengths; it never decodes
//! semantic values, and it ignores class tags entirely (positions are
//! physical).

use std::io::{self, Cursor};

use crate::decode::{CLASS_TAG_LEN, HEADER_LEN, INT_WIDTH};
use crate::error::PatchError;
use crate::reader::LittleEndianReader;
use crate::types::SaveFormat;

type Reader<'a> = LittleEndianReader<Cursor<&'a [u8]>>;

/// Byte span of a name field, covering the length prefix and the name
/// bytes.
struct NameSpan {
    start: usize,
    end: usize,
}

/// Produce a new buffer identical to `original` except that the record at
/// `target_position` (1-based physical order) carries `new_name`. All
/// content after the patched span, including any trailing opaque bytes,
/// shifts by the length delta with its bytes unchanged.
pub fn rename(
    original: &[u8],
    format: SaveFormat,
    target_position: u8,
    new_name: &str,
) -> Result<Vec<u8>, PatchError> {
    if !(1..=3).contains(&target_position) {
        return Err(PatchError::NoSuchRecord(target_position));
    }
    // Names are stored as ASCII with a byte-count prefix.
    if !new_name.is_ascii() {
        return Err(PatchError::InvalidEncoding);
    }

    let span = find_name_span(original, format, target_position)?;

    let mut out =
        Vec::with_capacity(original.len() - (span.end - span.start) + INT_WIDTH as usize + new_name.len());
    out.extend_from_slice(&original[..span.start]);
    out.extend_from_slice(&(new_name.len() as i32).to_le_bytes());
    out.extend_from_slice(new_name.as_bytes());
    out.extend_from_slice(&original[span.end..]);
    Ok(out)
}

fn find_name_span(
    bytes: &[u8],
    format: SaveFormat,
    target_position: u8,
) -> Result<NameSpan, PatchError> {
    let mut r = LittleEndianReader::new(Cursor::new(bytes));
    r.skip(HEADER_LEN).map_err(io_to_patch)?;

    for _ in 1..target_position {
        skip_record(&mut r, format)?;
    }

    r.skip(CLASS_TAG_LEN as u64).map_err(io_to_patch)?;
    let start = r.position().map_err(io_to_patch)? as usize;
    let len = read_len(&mut r)?;
    r.skip(len as u64).map_err(io_to_patch)?;
    let end = r.position().map_err(io_to_patch)? as usize;
    Ok(NameSpan { start, end })
}

fn skip_record(r: &mut Reader<'_>, format: SaveFormat) -> Result<(), PatchError> {
    r.skip(CLASS_TAG_LEN as u64).map_err(io_to_patch)?;
    skip_name(r)?;
    // Floor, the HP pair, gold.
    skip_ints(r, 4)?;

    match format {
        SaveFormat::MultiPlayer => {
            // 4 reserved ints.
            skip_ints(r, 4)?;
            skip_card_list(r)?;
            // Trailing reserved int.
            skip_ints(r, 1)?;
        }
        SaveFormat::SinglePlayer => {
            // Slots, level, 2 reserved ints.
            skip_ints(r, 4)?;
            skip_card_list(r)?;
            let companion_count = read_len(r)?;
            skip_ints(r, 1)?;
            for _ in 0..companion_count {
                skip_companion(r)?;
            }
        }
    }
    Ok(())
}

fn skip_companion(r: &mut Reader<'_>) -> Result<(), PatchError> {
    // Reserved int (id).
    skip_ints(r, 1)?;
    skip_name(r)?;
    // Floor, reserved type int, level, HP pair, mana pair.
    skip_ints(r, 7)?;
    // 6 reserved ints.
    skip_ints(r, 6)?;
    skip_card_list(r)?;
    skip_card_list(r)?;
    // Trailing reserved int.
    skip_ints(r, 1)?;
    Ok(())
}

fn skip_name(r: &mut Reader<'_>) -> Result<(), PatchError> {
    let len = read_len(r)?;
    r.skip(len as u64).map_err(io_to_patch)
}

fn skip_card_list(r: &mut Reader<'_>) -> Result<(), PatchError> {
    let count = read_len(r)?;
    r.skip(count as u64 * INT_WIDTH).map_err(io_to_patch)
}

fn read_len(r: &mut Reader<'_>) -> Result<usize, PatchError> {
    let raw = r.read_i32().map_err(io_to_patch)?;
    if raw < 0 {
        return Err(PatchError::Truncated);
    }
    Ok(raw as usize)
}

fn skip_ints(r: &mut Reader<'_>, n: u64) -> Result<(), PatchError> {
    r.skip(n * INT_WIDTH).map_err(io_to_patch)
}

fn io_to_patch(_: io::Error) -> PatchError {
    PatchError::Truncated
}
