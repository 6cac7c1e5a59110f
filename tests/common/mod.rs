//! Builds synthetic saves with known contents.
#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const SAVE_LENGTH: usize = 0x8000;
pub const PARTY_OFFSET: usize = 0x2f2c;
pub const CURRENT_BOX_OFFSET: usize = 0x30c0;
pub const BOX_SIZE: usize = 1122;

pub const ROG: &[u8] = &[0x91, 0x8e, 0x86, 0x50];
pub const GARY: &[u8] = &[0x86, 0x80, 0x91, 0x98, 0x50];

pub fn stored_box_offset(number: usize) -> usize {
    0x4000 + BOX_SIZE * (number - 1)
}

/// Encodes upper-case ASCII (plus digits) into the game's charset, terminated.
pub fn encode_name(name: &str) -> Vec<u8> {
    let mut encoded = name
        .bytes()
        .map(|c| match c {
            b'A'..=b'Z' => 0x80 + (c - b'A'),
            b'0'..=b'9' => 0xf6 + (c - b'0'),
            _ => panic!("unsupported character in test name"),
        })
        .collect::<Vec<_>>();
    encoded.push(0x50);
    encoded
}

#[derive(Clone)]
pub struct Mon {
    pub species: u8,
    pub hp: u16,
    pub level: u8,
    pub types: [u8; 2],
    pub moves: [u8; 4],
    pub pp: [u8; 4],
    pub trainer_id: u16,
    pub experience: u32,
    pub ivs: [u8; 2],
    pub nickname: &'static str,
    pub original_trainer: &'static str,
}

impl Mon {
    pub fn bulbasaur() -> Self {
        Mon {
            species: 0x99,
            hp: 45,
            level: 15,
            types: [0x16, 0x03],
            moves: [0x21, 0x2d, 0x49, 0x00],
            pp: [0x23, 0x28, 0x4a, 0x00],
            trainer_id: 0x1f2e,
            experience: 3375,
            ivs: [0xa9, 0x7c],
            nickname: "BULBY",
            original_trainer: "ROG",
        }
    }

    pub fn rattata() -> Self {
        Mon {
            species: 0xa5,
            hp: 20,
            level: 4,
            types: [0x00, 0x00],
            moves: [0x21, 0x27, 0xee, 0x00],
            pp: [0x23, 0x1e, 0x10, 0x00],
            trainer_id: 0x1f2e,
            experience: 64,
            ivs: [0x11, 0x22],
            nickname: "RATTATA",
            original_trainer: "ROG",
        }
    }

    fn write_shared(&self, record: &mut [u8]) {
        record[0x00] = self.species;
        record[0x01..0x03].copy_from_slice(&self.hp.to_be_bytes());
        record[0x03] = self.level;
        record[0x05..0x07].copy_from_slice(&self.types);
        record[0x08..0x0c].copy_from_slice(&self.moves);
        record[0x0c..0x0e].copy_from_slice(&self.trainer_id.to_be_bytes());
        record[0x0e..0x11].copy_from_slice(&self.experience.to_be_bytes()[1..]);
        record[0x1b..0x1d].copy_from_slice(&self.ivs);
        record[0x1d..0x21].copy_from_slice(&self.pp);
    }
}

pub struct SaveBuilder {
    pub data: Vec<u8>,
}

impl SaveBuilder {
    /// A save with every list empty and every box uninitialized.
    pub fn new() -> Self {
        let mut data = vec![0u8; SAVE_LENGTH];
        for number in 1..=12 {
            data[stored_box_offset(number)] = 0xff;
        }
        SaveBuilder { data }
    }

    /// The reference trainer: ROG, rival GARY, 46343 money, seven bag items and a
    /// registered Bulbasaur.
    pub fn reference() -> Self {
        let mut builder = SaveBuilder::new();
        builder.put(0x2598, ROG);
        builder.put(0x25f6, GARY);
        builder.put(0x25f3, &[0x04, 0x63, 0x43]);
        builder.put(
            0x25c9,
            &[
                7, 0x05, 1, 0xea, 1, 0xd3, 1, 0x31, 1, 0x3f, 1, 0x2d, 2, 0x06, 4, 0xff,
            ],
        );
        builder.put(0x27e6, &[2, 0x14, 1, 0x0e, 34, 0xff]);
        builder.data[0x25a3] = 0b0000_0001;
        builder.data[0x25b6] = 0b0000_0011;
        builder.data[0x2601] = 0b1100_0011;
        builder.data[0x2602] = 0b0000_0011;
        builder.data[0x271c] = 90;
        builder.data[0x284c] = 2;
        builder.put(0x2850, &[0x12, 0x34]);
        builder.put(0x2ced, &[0x0c, 0x00, 34, 56]);
        builder
    }

    pub fn put(&mut self, offset: usize, bytes: &[u8]) -> &mut Self {
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    pub fn party(&mut self, mons: &[Mon]) -> &mut Self {
        self.creature_list(PARTY_OFFSET, 6, 44, mons, |mon, record| {
            record[0x21] = mon.level;
            record[0x22..0x24].copy_from_slice(&(mon.hp + 5).to_be_bytes());
            record[0x24..0x26].copy_from_slice(&21u16.to_be_bytes());
            record[0x26..0x28].copy_from_slice(&22u16.to_be_bytes());
            record[0x28..0x2a].copy_from_slice(&23u16.to_be_bytes());
            record[0x2a..0x2c].copy_from_slice(&24u16.to_be_bytes());
        })
    }

    pub fn pc_box(&mut self, offset: usize, mons: &[Mon]) -> &mut Self {
        self.creature_list(offset, 20, 33, mons, |_, _| {})
    }

    fn creature_list(
        &mut self,
        offset: usize,
        capacity: usize,
        stride: usize,
        mons: &[Mon],
        extra: impl Fn(&Mon, &mut [u8]),
    ) -> &mut Self {
        self.data[offset] = mons.len() as u8;
        for (idx, mon) in mons.iter().enumerate() {
            self.data[offset + 1 + idx] = mon.species;
        }
        self.data[offset + 1 + mons.len()] = 0xff;

        let records = offset + capacity + 2;
        let trainers = records + capacity * stride;
        let nicknames = trainers + capacity * 11;
        for (idx, mon) in mons.iter().enumerate() {
            let start = records + idx * stride;
            let record = &mut self.data[start..start + stride];
            mon.write_shared(record);
            extra(mon, record);

            let name = encode_name(mon.original_trainer);
            self.put(trainers + idx * 11, &name);
            let name = encode_name(mon.nickname);
            self.put(nicknames + idx * 11, &name);
        }
        self
    }

    pub fn write_temp(&self) -> NamedTempFile {
        let mut temp_save_file = NamedTempFile::new().unwrap();
        temp_save_file.write_all(&self.data[..]).unwrap();
        temp_save_file.flush().unwrap();
        temp_save_file
    }
}
