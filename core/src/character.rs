//! Composite value types built on the phoneme enums: the vowel nucleus of a
//! syllable and the single rendered character unit.
//!
//! Both types are immutable values. The typing engine rebuilds them on every
//! keystroke; "transformations" (adding a circumflex, retargeting a tone)
//! always produce fresh values instead of mutating in place.

use std::fmt;
use std::str::FromStr;

use crate::phoneme::{Consonant, Tone, Vowel};

/// Longest legal vowel nucleus ("uyê", "ươi", ...).
pub const MAX_NUCLEUS_LEN: usize = 3;

/// The ordered vowel nucleus of one syllable: 1 to 3 vowels in typed order.
///
/// Equality and hashing are by exact ordered content. Whether the sequence is
/// phonotactically legal is a derived property answered by
/// [`crate::validator::is_valid`], never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VowelSequence {
    vowels: Vec<Vowel>,
}

impl VowelSequence {
    /// Build a sequence from 1–3 vowels. Empty or over-long input is refused.
    pub fn new(vowels: impl Into<Vec<Vowel>>) -> Option<Self> {
        let vowels = vowels.into();
        if vowels.is_empty() || vowels.len() > MAX_NUCLEUS_LEN {
            return None;
        }
        Some(Self { vowels })
    }

    pub fn single(v: Vowel) -> Self {
        Self { vowels: vec![v] }
    }

    pub fn pair(a: Vowel, b: Vowel) -> Self {
        Self { vowels: vec![a, b] }
    }

    pub fn triple(a: Vowel, b: Vowel, c: Vowel) -> Self {
        Self { vowels: vec![a, b, c] }
    }

    pub fn len(&self) -> usize {
        self.vowels.len()
    }

    /// Always false; the constructor refuses empty nuclei. Kept so callers
    /// holding a generic collection-like value can ask the usual question.
    pub fn is_empty(&self) -> bool {
        self.vowels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vowel> {
        self.vowels.get(index).copied()
    }

    pub fn vowels(&self) -> &[Vowel] {
        &self.vowels
    }

    pub fn iter(&self) -> impl Iterator<Item = Vowel> + '_ {
        self.vowels.iter().copied()
    }

    /// A copy with the vowel at `index` replaced. Out-of-range indices
    /// return an unchanged copy; the nucleus never grows this way.
    pub fn with_vowel_at(&self, index: usize, vowel: Vowel) -> Self {
        let mut vowels = self.vowels.clone();
        if let Some(slot) = vowels.get_mut(index) {
            *slot = vowel;
        }
        Self { vowels }
    }

    /// A copy with `vowel` appended, or `None` when the nucleus is already
    /// at its maximum length.
    pub fn appended(&self, vowel: Vowel) -> Option<Self> {
        if self.vowels.len() >= MAX_NUCLEUS_LEN {
            return None;
        }
        let mut vowels = self.vowels.clone();
        vowels.push(vowel);
        Some(Self { vowels })
    }
}

impl fmt::Display for VowelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.vowels {
            write!(f, "{}", v.as_char())?;
        }
        Ok(())
    }
}

/// Error parsing a vowel sequence from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseVowelSequenceError {
    /// A character was not one of the 12 bare vowel letters.
    NotAVowel(char),
    /// The text held zero or more than three vowels.
    BadLength(usize),
}

impl fmt::Display for ParseVowelSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseVowelSequenceError::NotAVowel(c) => {
                write!(f, "'{c}' is not a Vietnamese vowel letter")
            }
            ParseVowelSequenceError::BadLength(n) => {
                write!(f, "a vowel nucleus holds 1 to 3 vowels, got {n}")
            }
        }
    }
}

impl std::error::Error for ParseVowelSequenceError {}

impl FromStr for VowelSequence {
    type Err = ParseVowelSequenceError;

    /// Parse bare (tone-less) vowel letters, e.g. `"ươi"`. Used to keep the
    /// static cluster tables legible.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut vowels = Vec::with_capacity(MAX_NUCLEUS_LEN);
        for c in s.chars() {
            let v = Vowel::from_char(c).ok_or(ParseVowelSequenceError::NotAVowel(c))?;
            vowels.push(v);
        }
        let n = vowels.len();
        VowelSequence::new(vowels).ok_or(ParseVowelSequenceError::BadLength(n))
    }
}

/// One rendered grapheme unit.
///
/// Exactly one of the three payloads exists at a time, which the enum makes
/// structurally true: a toned vowel, a consonant (always tone-less), or a
/// verbatim pass-through for anything outside the Vietnamese alphabet
/// (digits, punctuation, other scripts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VnChar {
    Vowel {
        vowel: Vowel,
        tone: Tone,
        uppercase: bool,
    },
    Consonant {
        consonant: Consonant,
        uppercase: bool,
    },
    PassThrough(char),
}

impl VnChar {
    pub fn vowel(vowel: Vowel, tone: Tone, uppercase: bool) -> Self {
        VnChar::Vowel {
            vowel,
            tone,
            uppercase,
        }
    }

    pub fn consonant(consonant: Consonant, uppercase: bool) -> Self {
        VnChar::Consonant {
            consonant,
            uppercase,
        }
    }

    pub fn pass_through(c: char) -> Self {
        VnChar::PassThrough(c)
    }

    /// The tone carried by this unit; consonants and pass-through characters
    /// are always level.
    pub fn tone(&self) -> Tone {
        match self {
            VnChar::Vowel { tone, .. } => *tone,
            VnChar::Consonant { .. } | VnChar::PassThrough(_) => Tone::Level,
        }
    }
}
