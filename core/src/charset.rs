// core/src/charset.rs
//
// Rendering of composed characters into a target text encoding.
//
// The Unicode table below covers all 12 vowels x 6 tones as precomposed
// codepoints, lowercase and uppercase. The "compound" table emits the bare
// letter followed by a combining tone mark, for consumers that insert
// diacritics themselves. The legacy codepages (TCVN3, VNI Windows, CP1258)
// intentionally keep the upstream fallback to precomposed Unicode; see
// DESIGN.md for that decision. What each variant does promise is its
// backspace contract: whether one visible character may span more than one
// code unit on the consumer side.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::character::VnChar;
use crate::phoneme::{Consonant, Tone, Vowel};

/// Target text encoding for rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeTable {
    /// Precomposed Unicode (NFC), the default.
    Unicode,
    /// Unicode with combining tone marks appended after the base letter.
    UnicodeCompound,
    /// Legacy TCVN3 (ABC) codepage.
    Tcvn3,
    /// Legacy VNI Windows encoding.
    VniWindows,
    /// Vietnamese locale codepage 1258.
    Cp1258,
}

impl CodeTable {
    pub const ALL: [CodeTable; 5] = [
        CodeTable::Unicode,
        CodeTable::UnicodeCompound,
        CodeTable::Tcvn3,
        CodeTable::VniWindows,
        CodeTable::Cp1258,
    ];

    /// Whether consumers of this encoding must erase two code units when
    /// overtyping one previously rendered character. True for the variants
    /// that split a grapheme into base + mark sequences.
    pub fn needs_double_backspace(&self) -> bool {
        match self {
            CodeTable::UnicodeCompound | CodeTable::VniWindows | CodeTable::Cp1258 => true,
            CodeTable::Unicode | CodeTable::Tcvn3 => false,
        }
    }
}

/// (vowel, tone) -> (lowercase, uppercase) precomposed codepoints.
static PRECOMPOSED: Lazy<AHashMap<(Vowel, Tone), (char, char)>> = Lazy::new(|| {
    use Tone::*;
    use Vowel::*;
    let mut m = AHashMap::new();
    // a
    m.insert((A, Level), ('a', 'A'));
    m.insert((A, Acute), ('á', 'Á'));
    m.insert((A, Grave), ('à', 'À'));
    m.insert((A, HookAbove), ('ả', 'Ả'));
    m.insert((A, Tilde), ('ã', 'Ã'));
    m.insert((A, DotBelow), ('ạ', 'Ạ'));
    // ă
    m.insert((ABreve, Level), ('ă', 'Ă'));
    m.insert((ABreve, Acute), ('ắ', 'Ắ'));
    m.insert((ABreve, Grave), ('ằ', 'Ằ'));
    m.insert((ABreve, HookAbove), ('ẳ', 'Ẳ'));
    m.insert((ABreve, Tilde), ('ẵ', 'Ẵ'));
    m.insert((ABreve, DotBelow), ('ặ', 'Ặ'));
    // â
    m.insert((ACircumflex, Level), ('â', 'Â'));
    m.insert((ACircumflex, Acute), ('ấ', 'Ấ'));
    m.insert((ACircumflex, Grave), ('ầ', 'Ầ'));
    m.insert((ACircumflex, HookAbove), ('ẩ', 'Ẩ'));
    m.insert((ACircumflex, Tilde), ('ẫ', 'Ẫ'));
    m.insert((ACircumflex, DotBelow), ('ậ', 'Ậ'));
    // e
    m.insert((E, Level), ('e', 'E'));
    m.insert((E, Acute), ('é', 'É'));
    m.insert((E, Grave), ('è', 'È'));
    m.insert((E, HookAbove), ('ẻ', 'Ẻ'));
    m.insert((E, Tilde), ('ẽ', 'Ẽ'));
    m.insert((E, DotBelow), ('ẹ', 'Ẹ'));
    // ê
    m.insert((ECircumflex, Level), ('ê', 'Ê'));
    m.insert((ECircumflex, Acute), ('ế', 'Ế'));
    m.insert((ECircumflex, Grave), ('ề', 'Ề'));
    m.insert((ECircumflex, HookAbove), ('ể', 'Ể'));
    m.insert((ECircumflex, Tilde), ('ễ', 'Ễ'));
    m.insert((ECircumflex, DotBelow), ('ệ', 'Ệ'));
    // i
    m.insert((I, Level), ('i', 'I'));
    m.insert((I, Acute), ('í', 'Í'));
    m.insert((I, Grave), ('ì', 'Ì'));
    m.insert((I, HookAbove), ('ỉ', 'Ỉ'));
    m.insert((I, Tilde), ('ĩ', 'Ĩ'));
    m.insert((I, DotBelow), ('ị', 'Ị'));
    // o
    m.insert((O, Level), ('o', 'O'));
    m.insert((O, Acute), ('ó', 'Ó'));
    m.insert((O, Grave), ('ò', 'Ò'));
    m.insert((O, HookAbove), ('ỏ', 'Ỏ'));
    m.insert((O, Tilde), ('õ', 'Õ'));
    m.insert((O, DotBelow), ('ọ', 'Ọ'));
    // ô
    m.insert((OCircumflex, Level), ('ô', 'Ô'));
    m.insert((OCircumflex, Acute), ('ố', 'Ố'));
    m.insert((OCircumflex, Grave), ('ồ', 'Ồ'));
    m.insert((OCircumflex, HookAbove), ('ổ', 'Ổ'));
    m.insert((OCircumflex, Tilde), ('ỗ', 'Ỗ'));
    m.insert((OCircumflex, DotBelow), ('ộ', 'Ộ'));
    // ơ
    m.insert((OHorn, Level), ('ơ', 'Ơ'));
    m.insert((OHorn, Acute), ('ớ', 'Ớ'));
    m.insert((OHorn, Grave), ('ờ', 'Ờ'));
    m.insert((OHorn, HookAbove), ('ở', 'Ở'));
    m.insert((OHorn, Tilde), ('ỡ', 'Ỡ'));
    m.insert((OHorn, DotBelow), ('ợ', 'Ợ'));
    // u
    m.insert((U, Level), ('u', 'U'));
    m.insert((U, Acute), ('ú', 'Ú'));
    m.insert((U, Grave), ('ù', 'Ù'));
    m.insert((U, HookAbove), ('ủ', 'Ủ'));
    m.insert((U, Tilde), ('ũ', 'Ũ'));
    m.insert((U, DotBelow), ('ụ', 'Ụ'));
    // ư
    m.insert((UHorn, Level), ('ư', 'Ư'));
    m.insert((UHorn, Acute), ('ứ', 'Ứ'));
    m.insert((UHorn, Grave), ('ừ', 'Ừ'));
    m.insert((UHorn, HookAbove), ('ử', 'Ử'));
    m.insert((UHorn, Tilde), ('ữ', 'Ữ'));
    m.insert((UHorn, DotBelow), ('ự', 'Ự'));
    // y
    m.insert((Y, Level), ('y', 'Y'));
    m.insert((Y, Acute), ('ý', 'Ý'));
    m.insert((Y, Grave), ('ỳ', 'Ỳ'));
    m.insert((Y, HookAbove), ('ỷ', 'Ỷ'));
    m.insert((Y, Tilde), ('ỹ', 'Ỹ'));
    m.insert((Y, DotBelow), ('ỵ', 'Ỵ'));
    m
});

/// Combining mark for a tone, empty for the level tone.
fn combining_mark(tone: Tone) -> &'static str {
    match tone {
        Tone::Level => "",
        Tone::Acute => "\u{0301}",
        Tone::Grave => "\u{0300}",
        Tone::HookAbove => "\u{0309}",
        Tone::Tilde => "\u{0303}",
        Tone::DotBelow => "\u{0323}",
    }
}

fn precomposed(vowel: Vowel, tone: Tone, uppercase: bool) -> String {
    PRECOMPOSED
        .get(&(vowel, tone))
        .map(|&(lower, upper)| {
            let c = if uppercase { upper } else { lower };
            c.to_string()
        })
        .unwrap_or_default()
}

/// Render one toned vowel into `table`. A missing table entry renders as
/// the empty string so a bad lookup never aborts composition mid-keystroke.
pub fn render_vowel(vowel: Vowel, tone: Tone, uppercase: bool, table: CodeTable) -> String {
    match table {
        CodeTable::Unicode => precomposed(vowel, tone, uppercase),
        CodeTable::UnicodeCompound => {
            let base = precomposed(vowel, Tone::Level, uppercase);
            if base.is_empty() {
                return base;
            }
            let mut out = base;
            out.push_str(combining_mark(tone));
            out
        }
        // Legacy codepages fall back to precomposed Unicode output.
        CodeTable::Tcvn3 | CodeTable::VniWindows | CodeTable::Cp1258 => {
            precomposed(vowel, tone, uppercase)
        }
    }
}

/// Render a consonant; capitalization touches the first letter only, so
/// "tr" becomes "Tr", never "TR".
pub fn render_consonant(consonant: Consonant, uppercase: bool) -> String {
    let spelling = consonant.spelling();
    if !uppercase {
        return spelling.to_string();
    }
    let mut chars = spelling.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render one character unit. Pass-through characters come back verbatim.
pub fn render(ch: &VnChar, table: CodeTable) -> String {
    match *ch {
        VnChar::Vowel {
            vowel,
            tone,
            uppercase,
        } => render_vowel(vowel, tone, uppercase, table),
        VnChar::Consonant {
            consonant,
            uppercase,
        } => render_consonant(consonant, uppercase),
        VnChar::PassThrough(c) => c.to_string(),
    }
}
