//! Decoders for the strided records embedded in the save: creature lists (the
//! party and the PC boxes) and item lists (bag and PC storage).

use crate::{
    charset::decode_terminated,
    error::{Error, Result},
    numeric::{bit_slice, bits_to_int, byte_to_bits, bytes_to_uint},
    region,
    tables::{item_name, move_name, species_name, Type},
};

/// Width of every name slot (7 characters, terminator and padding).
pub const NAME_LENGTH: usize = 11;

/// Marks a list that was never initialized.
const EMPTY_LIST: u8 = 0xff;

const PARTY_CAPACITY: usize = 6;
const PARTY_RECORD_SIZE: usize = 44;
const BOX_CAPACITY: usize = 20;
const BOX_RECORD_SIZE: usize = 33;

/// The two shapes a creature list takes. Both start with a count byte and a
/// terminated species header, followed by the records and then two name tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordLayout {
    Party,
    Box,
}

impl RecordLayout {
    pub fn capacity(&self) -> usize {
        match self {
            RecordLayout::Party => PARTY_CAPACITY,
            RecordLayout::Box => BOX_CAPACITY,
        }
    }

    pub fn stride(&self) -> usize {
        match self {
            RecordLayout::Party => PARTY_RECORD_SIZE,
            RecordLayout::Box => BOX_RECORD_SIZE,
        }
    }

    /// Count byte plus the species header and its terminator.
    pub fn records_offset(&self) -> usize {
        1 + self.capacity() + 1
    }

    pub fn original_trainers_offset(&self) -> usize {
        self.records_offset() + self.capacity() * self.stride()
    }

    pub fn nicknames_offset(&self) -> usize {
        self.original_trainers_offset() + self.capacity() * NAME_LENGTH
    }

    /// Total bytes occupied by a full list.
    pub fn list_size(&self) -> usize {
        self.nicknames_offset() + self.capacity() * NAME_LENGTH
    }

    /// Absolute `(start, end)` of the record in `slot` for a list at `list_offset`.
    pub fn record_window(&self, list_offset: usize, slot: usize) -> (usize, usize) {
        let start = list_offset + self.records_offset() + slot * self.stride();
        (start, start + self.stride())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemEntry {
    pub name: &'static str,
    pub count: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub id: u8,
    pub name: &'static str,
    pub pp: u8,
    pub pp_ups: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffortValues {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub special: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndividualValues {
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub special: u8,
}

/// Fields only the party keeps; boxed creatures recompute them on withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartyStats {
    pub level: u8,
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub special: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Creature {
    pub species: &'static str,
    pub current_hp: u16,
    /// Level as stored in the shared part of the record. Only kept current while boxed.
    pub box_level: u8,
    /// Raw status-condition bits; their meaning is not decoded.
    pub status: u8,
    pub types: [Type; 2],
    pub catch_rate: u8,
    pub moves: [Option<Move>; 4],
    pub trainer_id: u16,
    pub experience: u32,
    pub evs: EffortValues,
    pub ivs: IndividualValues,
    pub original_trainer: String,
    pub nickname: String,
    pub party_stats: Option<PartyStats>,
}

impl Creature {
    /// The party level when present, otherwise the boxed level byte.
    pub fn level(&self) -> u8 {
        self.party_stats
            .map(|stats| stats.level)
            .unwrap_or(self.box_level)
    }
}

/// One record's bytes plus where they sit in the save, for error reporting.
struct RecordFields<'a> {
    data: &'a [u8],
    base: usize,
}

impl RecordFields<'_> {
    fn byte(&self, offset: usize) -> u8 {
        self.data[offset]
    }

    fn uint(&self, offset: usize, width: usize) -> u32 {
        bytes_to_uint(&self.data[offset..offset + width])
    }

    fn word(&self, offset: usize) -> u16 {
        self.uint(offset, 2) as u16
    }

    fn nibbles(&self, offset: usize) -> (u8, u8) {
        let bits = byte_to_bits(self.byte(offset));
        (
            bits_to_int(bit_slice(&bits, 0, 4)),
            bits_to_int(bit_slice(&bits, 4, 8)),
        )
    }

    fn species(&self) -> Result<&'static str> {
        let value = self.byte(0x00);
        species_name(value).ok_or(Error::UnknownLookupValue {
            field: "species",
            offset: self.base,
            value,
        })
    }

    fn element(&self, offset: usize) -> Result<Type> {
        let value = self.byte(offset);
        Type::from_byte(value).ok_or(Error::UnknownLookupValue {
            field: "type",
            offset: self.base + offset,
            value,
        })
    }

    fn move_slot(&self, slot: usize) -> Option<Move> {
        let id = self.byte(0x08 + slot);
        let pp_bits = byte_to_bits(self.byte(0x1d + slot));
        move_name(id).map(|name| Move {
            id,
            name,
            pp_ups: bits_to_int(bit_slice(&pp_bits, 0, 2)),
            pp: bits_to_int(bit_slice(&pp_bits, 2, 8)),
        })
    }
}

/// Decodes the creature in `slot` of the list at `list_offset`.
pub fn decode_creature(
    buffer: &[u8],
    list_offset: usize,
    layout: RecordLayout,
    slot: usize,
) -> Result<Creature> {
    let (base, _) = layout.record_window(list_offset, slot);
    let fields = RecordFields {
        data: region::slice(buffer, "creature record", base, layout.stride())?,
        base,
    };

    let original_trainer = region::slice(
        buffer,
        "original trainer name",
        list_offset + layout.original_trainers_offset() + slot * NAME_LENGTH,
        NAME_LENGTH,
    )?;
    let nickname = region::slice(
        buffer,
        "nickname",
        list_offset + layout.nicknames_offset() + slot * NAME_LENGTH,
        NAME_LENGTH,
    )?;

    let (attack_iv, defense_iv) = fields.nibbles(0x1b);
    let (speed_iv, special_iv) = fields.nibbles(0x1c);

    let party_stats = match layout {
        RecordLayout::Box => None,
        RecordLayout::Party => Some(PartyStats {
            level: fields.byte(0x21),
            max_hp: fields.word(0x22),
            attack: fields.word(0x24),
            defense: fields.word(0x26),
            speed: fields.word(0x28),
            special: fields.word(0x2a),
        }),
    };

    Ok(Creature {
        species: fields.species()?,
        current_hp: fields.word(0x01),
        box_level: fields.byte(0x03),
        status: fields.byte(0x04),
        types: [fields.element(0x05)?, fields.element(0x06)?],
        catch_rate: fields.byte(0x07),
        moves: [0, 1, 2, 3].map(|slot| fields.move_slot(slot)),
        trainer_id: fields.word(0x0c),
        experience: fields.uint(0x0e, 3),
        evs: EffortValues {
            hp: fields.word(0x11),
            attack: fields.word(0x13),
            defense: fields.word(0x15),
            speed: fields.word(0x17),
            special: fields.word(0x19),
        },
        ivs: IndividualValues {
            attack: attack_iv,
            defense: defense_iv,
            speed: speed_iv,
            special: special_iv,
        },
        original_trainer: decode_terminated(original_trainer),
        nickname: decode_terminated(nickname),
        party_stats,
    })
}

/// Decodes every creature in the list at `offset`.
pub fn decode_creature_list(
    buffer: &[u8],
    field: &'static str,
    offset: usize,
    layout: RecordLayout,
) -> Result<Vec<Creature>> {
    let count = region::read_u8(buffer, field, offset)?;
    if count == EMPTY_LIST {
        log::debug!("{field} at 0x{offset:04x} is uninitialized");
        return Ok(Vec::new());
    }

    let malformed = Error::MalformedRecord {
        field,
        offset,
        count,
        capacity: layout.capacity(),
    };
    if count as usize > layout.capacity() {
        log::warn!("{field} claims {count} entries, more than it can hold");
        return Err(malformed);
    }
    let names_end = offset + layout.nicknames_offset() + count as usize * NAME_LENGTH;
    if names_end > buffer.len() {
        log::warn!("{field} with {count} entries runs past the end of the save");
        return Err(malformed);
    }

    log::debug!("Decoding {count} entries of {field} at 0x{offset:04x}");
    (0..count as usize)
        .map(|slot| decode_creature(buffer, offset, layout, slot))
        .collect()
}

/// Decodes a count byte followed by that many `(item id, quantity)` pairs.
pub fn decode_item_list(
    buffer: &[u8],
    field: &'static str,
    offset: usize,
) -> Result<Vec<ItemEntry>> {
    let count = region::read_u8(buffer, field, offset)? as usize;
    if count == 0 {
        return Ok(Vec::new());
    }

    let pairs_offset = offset + 1;
    if pairs_offset + count * 2 > buffer.len() {
        log::warn!("{field} with {count} entries runs past the end of the save");
        return Err(Error::MalformedRecord {
            field,
            offset,
            count: count as u8,
            capacity: buffer.len().saturating_sub(pairs_offset) / 2,
        });
    }

    region::slice(buffer, field, pairs_offset, count * 2)?
        .chunks_exact(2)
        .enumerate()
        .map(|(idx, pair)| {
            item_name(pair[0])
                .map(|name| ItemEntry {
                    name,
                    count: pair[1],
                })
                .ok_or(Error::UnknownLookupValue {
                    field,
                    offset: pairs_offset + idx * 2,
                    value: pair[0],
                })
        })
        .collect()
}
