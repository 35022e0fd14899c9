//! Synthetic save-buffer builders in the demo's wire layout.
//!
//! Real `demons.save` files are proprietary, so tests construct their own
//! fixtures. All integers are little-endian i32; reserved spans are filled
//! with a marker value the codec must carry through untouched.

#![allow(dead_code)]

pub const HEADER_LEN: usize = 9;
pub const RESERVED: i32 = 0x5EED;

pub struct Companion {
    pub name: &'static str,
    pub floor: i32,
    pub level: i32,
    pub max_hp: i32,
    pub current_hp: i32,
    pub max_mana: i32,
    pub mana: i32,
    pub cards: Vec<i32>,
    pub future_cards: Vec<i32>,
}

impl Companion {
    pub fn simple(name: &'static str) -> Self {
        Self {
            name,
            floor: 2,
            level: 3,
            max_hp: 12,
            current_hp: 10,
            max_mana: 6,
            mana: 4,
            cards: vec![0x14, 0x15],
            future_cards: vec![0x16],
        }
    }
}

pub fn header() -> Vec<u8> {
    vec![0u8; HEADER_LEN]
}

pub fn push_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub fn push_name(buf: &mut Vec<u8>, name: &str) {
    push_i32(buf, name.len() as i32);
    buf.extend_from_slice(name.as_bytes());
}

pub fn push_cards(buf: &mut Vec<u8>, cards: &[i32]) {
    push_i32(buf, cards.len() as i32);
    for &card in cards {
        push_i32(buf, card);
    }
}

fn push_reserved(buf: &mut Vec<u8>, n: usize) {
    for _ in 0..n {
        push_i32(buf, RESERVED);
    }
}

fn push_prefix(buf: &mut Vec<u8>, tag: &str, name: &str, floor: i32, max_hp: i32, current_hp: i32, gold: i32) {
    assert_eq!(tag.len(), 3, "class tags are exactly 3 bytes");
    buf.extend_from_slice(tag.as_bytes());
    push_name(buf, name);
    push_i32(buf, floor);
    push_i32(buf, max_hp);
    push_i32(buf, current_hp);
    push_i32(buf, gold);
}

/// Append one multiplayer character record.
pub fn mp_record(
    buf: &mut Vec<u8>,
    tag: &str,
    name: &str,
    floor: i32,
    max_hp: i32,
    current_hp: i32,
    gold: i32,
    cards: &[i32],
) {
    push_prefix(buf, tag, name, floor, max_hp, current_hp, gold);
    push_reserved(buf, 4);
    push_cards(buf, cards);
    push_reserved(buf, 1);
}

/// Append one single-player character record with companions.
#[allow(clippy::too_many_arguments)]
pub fn sp_record(
    buf: &mut Vec<u8>,
    tag: &str,
    name: &str,
    floor: i32,
    max_hp: i32,
    current_hp: i32,
    gold: i32,
    slots: i32,
    level: i32,
    cards: &[i32],
    companions: &[Companion],
) {
    push_prefix(buf, tag, name, floor, max_hp, current_hp, gold);
    push_i32(buf, slots);
    push_i32(buf, level);
    push_reserved(buf, 2);
    push_cards(buf, cards);
    push_i32(buf, companions.len() as i32);
    push_reserved(buf, 1);
    for companion in companions {
        push_reserved(buf, 1); // id
        push_name(buf, companion.name);
        push_i32(buf, companion.floor);
        push_reserved(buf, 1); // type
        push_i32(buf, companion.level);
        push_i32(buf, companion.max_hp);
        push_i32(buf, companion.current_hp);
        push_i32(buf, companion.max_mana);
        push_i32(buf, companion.mana);
        push_reserved(buf, 6);
        push_cards(buf, &companion.cards);
        push_cards(buf, &companion.future_cards);
        push_reserved(buf, 1);
    }
}

/// A three-record multiplayer save with distinct, recognizable values.
pub fn sample_mp_save() -> Vec<u8> {
    let mut buf = header();
    mp_record(&mut buf, "mag", "Bob", 3, 100, 80, 50, &[0x01, 0x05]);
    mp_record(&mut buf, "war", "Grond", 3, 140, 140, 75, &[0x00, 0x01, 0x01]);
    mp_record(&mut buf, "rog", "Sable", 2, 90, 33, 12, &[0x0B, 0x0C, 0x0B]);
    buf
}

/// A three-record single-player save; the warrior carries two companions.
pub fn sample_sp_save() -> Vec<u8> {
    let mut buf = header();
    sp_record(&mut buf, "mag", "Vex", 5, 95, 70, 210, 2, 7, &[0x14, 0x1C], &[]);
    sp_record(
        &mut buf,
        "war",
        "Grond",
        5,
        150,
        122,
        180,
        3,
        8,
        &[0x00, 0x02, 0x06],
        &[Companion::simple("Imp"), Companion::simple("Wisp")],
    );
    sp_record(&mut buf, "rog", "Sable", 4, 88, 88, 95, 1, 6, &[0x0B], &[]);
    buf
}
