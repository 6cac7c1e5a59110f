//! Bit-packed flag bytes: game options, gym badges and the Pokédex bitmaps.
//!
//! Options are read through an MSB-first bit string, so index 0 is bit 7.
//! Badges and the Pokédex bitmaps run the other way: bit 0 is the first badge, and
//! the lowest bit of each dex byte is the lowest dex number in that byte.

use crate::numeric::{bit_set, bit_slice, byte_to_bits};
use crate::tables::{pokedex_name, POKEDEX_SIZE};

/// Bytes in each of the owned and seen bitmaps.
pub const POKEDEX_BITMAP_LENGTH: usize = 19;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleStyle {
    Switch,
    Set,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    Mono,
    Stereo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSpeed {
    Fast,
    Normal,
    Slow,
}

impl TextSpeed {
    fn from_bits(bits: &str) -> Option<Self> {
        match bits {
            "001" => Some(TextSpeed::Fast),
            "011" => Some(TextSpeed::Normal),
            "101" => Some(TextSpeed::Slow),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub battle_effects: bool,
    pub battle_style: BattleStyle,
    pub sound: Sound,
    /// `None` when the speed bits hold a pattern the options menu never writes.
    pub text_speed: Option<TextSpeed>,
}

impl From<u8> for Options {
    fn from(value: u8) -> Self {
        let bits = byte_to_bits(value);
        Options {
            battle_effects: !bit_set(&bits, 0),
            battle_style: if bit_set(&bits, 1) {
                BattleStyle::Set
            } else {
                BattleStyle::Switch
            },
            sound: if bit_set(&bits, 3) {
                Sound::Stereo
            } else {
                Sound::Mono
            },
            text_speed: TextSpeed::from_bits(bit_slice(&bits, 5, 8)),
        }
    }
}

pub const BADGE_NAMES: [&str; 8] = [
    "Boulder", "Cascade", "Thunder", "Rainbow", "Soul", "Marsh", "Volcano", "Earth",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Badges {
    pub boulder: bool,
    pub cascade: bool,
    pub thunder: bool,
    pub rainbow: bool,
    pub soul: bool,
    pub marsh: bool,
    pub volcano: bool,
    pub earth: bool,
}

impl Badges {
    pub fn as_array(&self) -> [bool; 8] {
        [
            self.boulder,
            self.cascade,
            self.thunder,
            self.rainbow,
            self.soul,
            self.marsh,
            self.volcano,
            self.earth,
        ]
    }

    pub fn earned(&self) -> Vec<&'static str> {
        BADGE_NAMES
            .iter()
            .zip(self.as_array())
            .filter_map(|(name, earned)| earned.then_some(*name))
            .collect()
    }
}

impl From<u8> for Badges {
    fn from(value: u8) -> Self {
        let earned = |bit: u8| (value >> bit) & 1 != 0;
        Badges {
            boulder: earned(0),
            cascade: earned(1),
            thunder: earned(2),
            rainbow: earned(3),
            soul: earned(4),
            marsh: earned(5),
            volcano: earned(6),
            earth: earned(7),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PokedexEntry {
    pub index: u8,
    pub species: &'static str,
    pub owned: bool,
    pub seen: bool,
}

/// Merges the owned and seen bitmaps into one entry per species.
pub fn decode_pokedex(
    owned: &[u8; POKEDEX_BITMAP_LENGTH],
    seen: &[u8; POKEDEX_BITMAP_LENGTH],
) -> Vec<PokedexEntry> {
    let mut pokedex = Vec::with_capacity(POKEDEX_SIZE);
    for (byte_idx, (owned_byte, seen_byte)) in owned.iter().zip(seen).enumerate() {
        for bit in 0..8 {
            let index = byte_idx * 8 + bit + 1;
            // The final byte's top bit is padding
            let Some(species) = pokedex_name(index) else {
                break;
            };
            pokedex.push(PokedexEntry {
                index: index as u8,
                species,
                owned: (owned_byte >> bit) & 1 != 0,
                seen: (seen_byte >> bit) & 1 != 0,
            });
        }
    }

    pokedex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_bits() {
        let options = Options::from(0b1101_0101);
        assert!(!options.battle_effects);
        assert_eq!(options.battle_style, BattleStyle::Set);
        assert_eq!(options.sound, Sound::Stereo);
        assert_eq!(options.text_speed, Some(TextSpeed::Slow));

        let options = Options::from(0b0000_0011);
        assert!(options.battle_effects);
        assert_eq!(options.battle_style, BattleStyle::Switch);
        assert_eq!(options.sound, Sound::Mono);
        assert_eq!(options.text_speed, Some(TextSpeed::Normal));

        assert_eq!(Options::from(0x01).text_speed, Some(TextSpeed::Fast));
        assert_eq!(Options::from(0x07).text_speed, None);
    }

    #[test]
    fn badge_bits() {
        let badges = Badges::from(0b1000_0011);
        assert!(badges.boulder && badges.cascade && badges.earth);
        assert!(!badges.thunder && !badges.volcano);
        assert_eq!(badges.earned(), vec!["Boulder", "Cascade", "Earth"]);
        assert_eq!(Badges::from(0x00), Badges::default());
        assert_eq!(Badges::from(0xff).earned().len(), 8);
    }

    #[test]
    fn first_badge_is_lowest_bit() {
        assert_eq!(Badges::from(0x01).earned(), vec!["Boulder"]);
        assert_eq!(Badges::from(0x03).earned(), vec!["Boulder", "Cascade"]);
        assert_eq!(Badges::from(0x80).earned(), vec!["Earth"]);
    }

    #[test]
    fn pokedex_has_151_entries() {
        let owned = [0u8; POKEDEX_BITMAP_LENGTH];
        let seen = [0xffu8; POKEDEX_BITMAP_LENGTH];
        let pokedex = decode_pokedex(&owned, &seen);
        assert_eq!(pokedex.len(), 151);
        assert!(pokedex
            .iter()
            .enumerate()
            .all(|(idx, entry)| entry.index as usize == idx + 1));
        assert!(pokedex.iter().all(|entry| entry.seen && !entry.owned));
        assert_eq!(pokedex[150].species, "Mew");
    }

    #[test]
    fn pokedex_bits_are_lsb_first() {
        let mut owned = [0u8; POKEDEX_BITMAP_LENGTH];
        let mut seen = [0u8; POKEDEX_BITMAP_LENGTH];
        owned[0] = 0b0000_0001;
        seen[0] = 0b0000_0011;
        owned[9] = 0b0000_1000; // dex 76
        owned[18] = 0b1100_0000; // dex 151 and the padding bit
        let pokedex = decode_pokedex(&owned, &seen);
        assert_eq!(
            pokedex[0],
            PokedexEntry {
                index: 1,
                species: "Bulbasaur",
                owned: true,
                seen: true
            }
        );
        assert!(!pokedex[1].owned && pokedex[1].seen);
        assert!(pokedex[75].owned);
        assert_eq!(pokedex[75].species, "Golem");
        assert!(pokedex[150].owned);
        assert_eq!(pokedex.len(), 151);
    }
}
