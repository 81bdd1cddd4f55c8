use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four DNA bases a matrix may hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DnaBase {
    A,
    T,
    C,
    G,
}

impl DnaBase {
    pub const ALL: [DnaBase; 4] = [Self::A, Self::T, Self::C, Self::G];

    /// Case-sensitive: lowercase letters are not bases.
    #[inline(always)]
    pub fn from_letter(letter: u8) -> Option<Self> {
        match letter {
            b'A' => Some(Self::A),
            b'T' => Some(Self::T),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn is_valid_letter(letter: u8) -> bool {
        matches!(letter, b'A' | b'T' | b'C' | b'G')
    }

    #[inline(always)]
    pub fn letter(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::T => b'T',
            Self::C => b'C',
            Self::G => b'G',
        }
    }

    #[inline(always)]
    pub fn as_char(self) -> char {
        self.letter() as char
    }
}

impl fmt::Display for DnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
