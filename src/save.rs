use std::{collections::BTreeMap, path::Path};

use crate::{
    charset::decode_terminated,
    error::{Error, Result},
    flags::{decode_pokedex, Badges, Options, PokedexEntry, POKEDEX_BITMAP_LENGTH},
    numeric::{bcd_to_int, bytes_to_uint},
    record::{
        decode_creature_list, decode_item_list, Creature, ItemEntry, RecordLayout, NAME_LENGTH,
    },
    region,
};

pub struct SaveFile {
    full_contents: Vec<u8>,
    pc_boxes: BTreeMap<BoxId, Result<Vec<Creature>>>,
}

pub const GAME_SAVE_DATA_LENGTH: usize = 0x8000;
pub const NUMBER_OF_BOXES: u8 = 12;

const PLAYER_NAME_OFFSET: usize = 0x2598;
const POKEDEX_OWNED_OFFSET: usize = 0x25a3;
const POKEDEX_SEEN_OFFSET: usize = 0x25b6;
const BAG_ITEMS_OFFSET: usize = 0x25c9;
const MONEY_OFFSET: usize = 0x25f3;
const RIVAL_NAME_OFFSET: usize = 0x25f6;
const OPTIONS_OFFSET: usize = 0x2601;
const BADGES_OFFSET: usize = 0x2602;
const PIKACHU_FRIENDSHIP_OFFSET: usize = 0x271c;
const PC_ITEMS_OFFSET: usize = 0x27e6;
const CURRENT_BOX_OFFSET: usize = 0x284c;
const CASINO_COINS_OFFSET: usize = 0x2850;
// Stored low byte first, so it's read backwards from the high byte
const HOURS_PLAYED_OFFSET: usize = 0x2cee;
const MINUTES_PLAYED_OFFSET: usize = 0x2cef;
const SECONDS_PLAYED_OFFSET: usize = 0x2cf0;
const PARTY_OFFSET: usize = 0x2f2c;
const CURRENT_BOX_DATA_OFFSET: usize = 0x30c0;
const STORED_BOXES_OFFSET: usize = 0x4000;

/// Identifies one of the PC box lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum BoxId {
    /// The working copy of whichever box is selected in the PC.
    Current,
    /// Box number 1 through 12.
    Stored(u8),
}

impl BoxId {
    pub fn all() -> impl Iterator<Item = BoxId> {
        std::iter::once(BoxId::Current).chain((1..=NUMBER_OF_BOXES).map(BoxId::Stored))
    }

    fn offset(&self) -> Option<usize> {
        match *self {
            BoxId::Current => Some(CURRENT_BOX_DATA_OFFSET),
            BoxId::Stored(number @ 1..=NUMBER_OF_BOXES) => Some(
                STORED_BOXES_OFFSET + RecordLayout::Box.list_size() * (number as usize - 1),
            ),
            BoxId::Stored(_) => None,
        }
    }
}

impl std::fmt::Display for BoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoxId::Current => f.write_str("current box"),
            BoxId::Stored(number) => write!(f, "box {number}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimePlayed {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainerInfo {
    pub player_name: String,
    pub rival_name: String,
    pub money: u32,
    pub casino_coins: u32,
    pub badges: Badges,
    pub time_played: TimePlayed,
}

impl SaveFile {
    /// Wraps an in-memory save. Box contents are decoded up front; every other view is
    /// decoded each time it's requested.
    pub fn new(full_contents: Vec<u8>) -> Self {
        if full_contents.len() != GAME_SAVE_DATA_LENGTH {
            log::warn!(
                "Unexpected length for a game save. Found: {}, Expected: {GAME_SAVE_DATA_LENGTH}",
                full_contents.len()
            );
        }

        let mut save = SaveFile {
            full_contents,
            pc_boxes: BTreeMap::new(),
        };
        let pc_boxes = BoxId::all()
            .map(|box_id| (box_id, save.decode_box(box_id)))
            .collect();
        save.pc_boxes = pc_boxes;
        save
    }

    /// Reads a save from disk.
    pub fn open(p: impl AsRef<Path>) -> Result<Self> {
        if p.as_ref().is_file() {
            Ok(SaveFile::new(std::fs::read(&p)?))
        } else {
            log::error!("No file at path: {}", p.as_ref().display());
            Err(Error::Io(format!("no file at {}", p.as_ref().display())))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.full_contents
    }

    /// Raw bytes at `offset`; a negative `size` reads backwards, see [`region::read`].
    pub fn peek(&self, offset: usize, size: isize) -> Result<Vec<u8>> {
        region::read(&self.full_contents, "peek", offset, size)
    }

    fn text(&self, field: &'static str, offset: usize) -> Result<String> {
        let bytes = region::slice(&self.full_contents, field, offset, NAME_LENGTH)?;
        Ok(decode_terminated(bytes))
    }

    fn bcd(&self, field: &'static str, offset: usize, len: usize) -> Result<u32> {
        Ok(bcd_to_int(region::slice(
            &self.full_contents,
            field,
            offset,
            len,
        )?))
    }

    fn byte(&self, field: &'static str, offset: usize) -> Result<u8> {
        region::read_u8(&self.full_contents, field, offset)
    }

    fn bitmap(&self, field: &'static str, offset: usize) -> Result<[u8; POKEDEX_BITMAP_LENGTH]> {
        let bytes = region::slice(&self.full_contents, field, offset, POKEDEX_BITMAP_LENGTH)?;
        let mut bitmap = [0u8; POKEDEX_BITMAP_LENGTH];
        bitmap.copy_from_slice(bytes);
        Ok(bitmap)
    }

    pub fn player_name(&self) -> Result<String> {
        self.text("player name", PLAYER_NAME_OFFSET)
    }

    pub fn rival_name(&self) -> Result<String> {
        self.text("rival name", RIVAL_NAME_OFFSET)
    }

    pub fn pokedex(&self) -> Result<Vec<PokedexEntry>> {
        let owned = self.bitmap("pokedex owned", POKEDEX_OWNED_OFFSET)?;
        let seen = self.bitmap("pokedex seen", POKEDEX_SEEN_OFFSET)?;
        Ok(decode_pokedex(&owned, &seen))
    }

    pub fn bag_items(&self) -> Result<Vec<ItemEntry>> {
        decode_item_list(&self.full_contents, "bag items", BAG_ITEMS_OFFSET)
    }

    pub fn pc_items(&self) -> Result<Vec<ItemEntry>> {
        decode_item_list(&self.full_contents, "pc items", PC_ITEMS_OFFSET)
    }

    pub fn money(&self) -> Result<u32> {
        self.bcd("money", MONEY_OFFSET, 3)
    }

    pub fn casino_coins(&self) -> Result<u32> {
        self.bcd("casino coins", CASINO_COINS_OFFSET, 2)
    }

    pub fn options(&self) -> Result<Options> {
        Ok(Options::from(self.byte("options", OPTIONS_OFFSET)?))
    }

    pub fn badges(&self) -> Result<Badges> {
        Ok(Badges::from(self.byte("badges", BADGES_OFFSET)?))
    }

    pub fn pikachu_friendship(&self) -> Result<u8> {
        self.byte("pikachu friendship", PIKACHU_FRIENDSHIP_OFFSET)
    }

    /// The selected PC box, 1-based.
    pub fn current_box_number(&self) -> Result<u16> {
        Ok(u16::from(self.byte("current box", CURRENT_BOX_OFFSET)?) + 1)
    }

    pub fn time_played(&self) -> Result<TimePlayed> {
        let hours = region::read(
            &self.full_contents,
            "hours played",
            HOURS_PLAYED_OFFSET,
            -2,
        )?;
        Ok(TimePlayed {
            hours: bytes_to_uint(&hours) as u16,
            minutes: self.byte("minutes played", MINUTES_PLAYED_OFFSET)?,
            seconds: self.byte("seconds played", SECONDS_PLAYED_OFFSET)?,
        })
    }

    pub fn trainer_info(&self) -> Result<TrainerInfo> {
        Ok(TrainerInfo {
            player_name: self.player_name()?,
            rival_name: self.rival_name()?,
            money: self.money()?,
            casino_coins: self.casino_coins()?,
            badges: self.badges()?,
            time_played: self.time_played()?,
        })
    }

    pub fn get_party(&self) -> Result<Vec<Creature>> {
        decode_creature_list(&self.full_contents, "party", PARTY_OFFSET, RecordLayout::Party)
    }

    fn decode_box(&self, box_id: BoxId) -> Result<Vec<Creature>> {
        let Some(offset) = box_id.offset() else {
            log::warn!("There is no {box_id}");
            return Ok(Vec::new());
        };
        decode_creature_list(&self.full_contents, "pc box", offset, RecordLayout::Box).map_err(
            |err| {
                log::error!("Failed to get Pokemon from {box_id}: {err}");
                err
            },
        )
    }

    /// Every box, decoded when the save was loaded. A box that failed to decode
    /// keeps its error without affecting the others.
    pub fn get_boxes(&self) -> &BTreeMap<BoxId, Result<Vec<Creature>>> {
        &self.pc_boxes
    }

    /// One box's contents. Box numbers past the last box hold nothing.
    pub fn get_box(&self, box_id: BoxId) -> Result<Vec<Creature>> {
        self.pc_boxes
            .get(&box_id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
