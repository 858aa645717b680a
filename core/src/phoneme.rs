// core/src/phoneme.rs
//
// Closed enumerations for the Vietnamese phoneme inventory: tones, vowel
// letters and consonants. Everything here is a plain value type; the
// diacritic predicates and spellings are derived from the enum identity
// rather than stored, so the tables cannot drift apart.

use std::fmt;

/// The six Vietnamese tones.
///
/// `Level` is the unmarked tone (thanh ngang); the other five correspond to
/// the diacritic the tone places on the anchor vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Level,
    Acute,
    Grave,
    HookAbove,
    Tilde,
    DotBelow,
}

impl Tone {
    /// All tones in table order (Level first).
    pub const ALL: [Tone; 6] = [
        Tone::Level,
        Tone::Acute,
        Tone::Grave,
        Tone::HookAbove,
        Tone::Tilde,
        Tone::DotBelow,
    ];

    /// Vietnamese name of the tone, used for display and debugging.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Level => "ngang",
            Tone::Acute => "sắc",
            Tone::Grave => "huyền",
            Tone::HookAbove => "hỏi",
            Tone::Tilde => "ngã",
            Tone::DotBelow => "nặng",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The twelve Vietnamese vowel letters.
///
/// The breve/circumflex/horn variants are separate letters of the alphabet,
/// not decorations: tone placement depends on which of them is present in a
/// cluster, so they must be distinguishable before any tone is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    ABreve,
    ACircumflex,
    E,
    ECircumflex,
    I,
    O,
    OCircumflex,
    OHorn,
    U,
    UHorn,
    Y,
}

impl Vowel {
    /// All vowels in alphabetical order.
    pub const ALL: [Vowel; 12] = [
        Vowel::A,
        Vowel::ABreve,
        Vowel::ACircumflex,
        Vowel::E,
        Vowel::ECircumflex,
        Vowel::I,
        Vowel::O,
        Vowel::OCircumflex,
        Vowel::OHorn,
        Vowel::U,
        Vowel::UHorn,
        Vowel::Y,
    ];

    /// True for â, ê, ô.
    pub fn has_circumflex(&self) -> bool {
        matches!(self, Vowel::ACircumflex | Vowel::ECircumflex | Vowel::OCircumflex)
    }

    /// True for ă only.
    pub fn has_breve(&self) -> bool {
        matches!(self, Vowel::ABreve)
    }

    /// True for ơ, ư.
    pub fn has_horn(&self) -> bool {
        matches!(self, Vowel::OHorn | Vowel::UHorn)
    }

    /// ASCII base letter used by the key-mapping layer (a/e/i/o/u/y).
    pub fn base_letter(&self) -> char {
        match self {
            Vowel::A | Vowel::ABreve | Vowel::ACircumflex => 'a',
            Vowel::E | Vowel::ECircumflex => 'e',
            Vowel::I => 'i',
            Vowel::O | Vowel::OCircumflex | Vowel::OHorn => 'o',
            Vowel::U | Vowel::UHorn => 'u',
            Vowel::Y => 'y',
        }
    }

    /// The lowercase letter itself, without any tone mark.
    pub fn as_char(&self) -> char {
        match self {
            Vowel::A => 'a',
            Vowel::ABreve => 'ă',
            Vowel::ACircumflex => 'â',
            Vowel::E => 'e',
            Vowel::ECircumflex => 'ê',
            Vowel::I => 'i',
            Vowel::O => 'o',
            Vowel::OCircumflex => 'ô',
            Vowel::OHorn => 'ơ',
            Vowel::U => 'u',
            Vowel::UHorn => 'ư',
            Vowel::Y => 'y',
        }
    }

    /// Parse a lowercase vowel letter. Tone-marked letters are not accepted;
    /// tones live on `VnChar`, not on the vowel identity.
    pub fn from_char(c: char) -> Option<Vowel> {
        Vowel::ALL.iter().copied().find(|v| v.as_char() == c)
    }

    /// The circumflexed counterpart, for clusters typed incrementally
    /// (a → â, e → ê, o → ô).
    pub fn with_circumflex(&self) -> Option<Vowel> {
        match self {
            Vowel::A => Some(Vowel::ACircumflex),
            Vowel::E => Some(Vowel::ECircumflex),
            Vowel::O => Some(Vowel::OCircumflex),
            _ => None,
        }
    }

    /// The breve counterpart (a → ă).
    pub fn with_breve(&self) -> Option<Vowel> {
        match self {
            Vowel::A => Some(Vowel::ABreve),
            _ => None,
        }
    }

    /// The horned counterpart (o → ơ, u → ư).
    pub fn with_horn(&self) -> Option<Vowel> {
        match self {
            Vowel::O => Some(Vowel::OHorn),
            Vowel::U => Some(Vowel::UHorn),
            _ => None,
        }
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Vietnamese consonants: the 17 single letters (đ included) and the 11
/// compound spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consonant {
    B,
    C,
    D,
    DBar,
    G,
    H,
    K,
    L,
    M,
    N,
    P,
    Q,
    R,
    S,
    T,
    V,
    X,
    Ch,
    Gh,
    Gi,
    Kh,
    Ng,
    Ngh,
    Nh,
    Ph,
    Qu,
    Th,
    Tr,
}

impl Consonant {
    /// All consonants, singles first, then compounds.
    pub const ALL: [Consonant; 28] = [
        Consonant::B,
        Consonant::C,
        Consonant::D,
        Consonant::DBar,
        Consonant::G,
        Consonant::H,
        Consonant::K,
        Consonant::L,
        Consonant::M,
        Consonant::N,
        Consonant::P,
        Consonant::Q,
        Consonant::R,
        Consonant::S,
        Consonant::T,
        Consonant::V,
        Consonant::X,
        Consonant::Ch,
        Consonant::Gh,
        Consonant::Gi,
        Consonant::Kh,
        Consonant::Ng,
        Consonant::Ngh,
        Consonant::Nh,
        Consonant::Ph,
        Consonant::Qu,
        Consonant::Th,
        Consonant::Tr,
    ];

    /// Canonical lowercase spelling. This is the single source of truth:
    /// `is_compound` and rendering both derive from it.
    pub fn spelling(&self) -> &'static str {
        match self {
            Consonant::B => "b",
            Consonant::C => "c",
            Consonant::D => "d",
            Consonant::DBar => "đ",
            Consonant::G => "g",
            Consonant::H => "h",
            Consonant::K => "k",
            Consonant::L => "l",
            Consonant::M => "m",
            Consonant::N => "n",
            Consonant::P => "p",
            Consonant::Q => "q",
            Consonant::R => "r",
            Consonant::S => "s",
            Consonant::T => "t",
            Consonant::V => "v",
            Consonant::X => "x",
            Consonant::Ch => "ch",
            Consonant::Gh => "gh",
            Consonant::Gi => "gi",
            Consonant::Kh => "kh",
            Consonant::Ng => "ng",
            Consonant::Ngh => "ngh",
            Consonant::Nh => "nh",
            Consonant::Ph => "ph",
            Consonant::Qu => "qu",
            Consonant::Th => "th",
            Consonant::Tr => "tr",
        }
    }

    /// A consonant is compound iff its spelling has more than one letter.
    pub fn is_compound(&self) -> bool {
        self.spelling().chars().count() > 1
    }

    /// Parse a canonical lowercase spelling ("ngh", "đ", ...).
    pub fn from_spelling(s: &str) -> Option<Consonant> {
        Consonant::ALL.iter().copied().find(|c| c.spelling() == s)
    }
}

impl fmt::Display for Consonant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}
