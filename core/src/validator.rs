// core/src/validator.rs
//
// Vowel-cluster phonotactics and the tone-anchor algorithm.
//
// The rule set here is closed and irregular: it is inherited from the
// conventions of historical Vietnamese input-method engines, and native
// typists notice immediately when any of the special cases drifts. The
// two-vowel placement logic in particular is an ordered cascade of named
// exceptions; evaluation order is load-bearing and each step is written as
// an explicit early return so it can be read and tested in isolation.
//
// Nothing in this module fails: `tone_anchor_index` is total and returns a
// best-effort index even for clusters that are invalid or still under
// construction, because the buffer layer probes mid-word states constantly.

use ahash::AHashSet;
use once_cell::sync::Lazy;

use crate::character::VowelSequence;
use crate::phoneme::{Consonant, Vowel};

/// Per-syllable facts the anchor algorithm needs besides the cluster itself.
///
/// `Default` describes a bare, freshly typed cluster: nothing before it,
/// nothing after it, traditional orthography.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneContext {
    /// A trailing consonant has been typed after the vowel cluster.
    pub has_trailing_consonant: bool,
    /// Modern oa/oe/uy placement convention is enabled.
    pub modern_style: bool,
    /// Initial consonant of the syllable, if any. Only the "gi" onset
    /// influences placement.
    pub preceding_consonant: Option<Consonant>,
    /// A pass-through character (digit, punctuation, ...) has been typed
    /// after the vowel cluster, so the cluster no longer ends the syllable.
    pub has_passthrough_after_vowels: bool,
}

impl ToneContext {
    /// "Terminated": the cluster currently sits at the very end of the
    /// syllable, with no consonant and no pass-through after it. A tone
    /// applied now closes the syllable onto its first vowel.
    fn is_terminated(&self) -> bool {
        !self.has_trailing_consonant && !self.has_passthrough_after_vowels
    }
}

fn cluster(s: &str) -> VowelSequence {
    match s.parse() {
        Ok(seq) => seq,
        Err(e) => panic!("bad cluster literal {s:?}: {e}"),
    }
}

fn cluster_set(entries: &[&str]) -> AHashSet<VowelSequence> {
    entries.iter().map(|s| cluster(s)).collect()
}

/// Every legal Vietnamese vowel nucleus: the 12 single letters plus the
/// double and triple clusters of standard orthography.
static CANONICAL: Lazy<AHashSet<VowelSequence>> = Lazy::new(|| {
    cluster_set(&[
        // singles
        "a", "ă", "â", "e", "ê", "i", "o", "ô", "ơ", "u", "ư", "y",
        // doubles
        "ai", "ao", "au", "ay", "âu", "ây", "eo", "êu", "ia", "iê", "iu",
        "oa", "oă", "oe", "oi", "ôi", "ơi", "oo", "ua", "uâ", "uê", "ui",
        "uô", "uơ", "uy", "ưa", "ưi", "ươ", "ưu", "yê",
        // triples
        "iêu", "yêu", "oai", "oay", "uây", "uôi", "uya", "uyê", "uyu",
        "ươi", "ươu",
    ])
});

/// Clusters that can stand word-final and still take a tone. Placement:
/// second vowel when a trailing consonant follows, first vowel otherwise.
static COMPLETE: Lazy<AHashSet<VowelSequence>> = Lazy::new(|| {
    cluster_set(&[
        "ai", "ao", "au", "ay", "âu", "ây", "eo", "êu", "ia", "iu", "oi",
        "ôi", "ơi", "ua", "ui", "ưa", "ưi", "ưu",
    ])
});

/// Clusters whose anchor depends on whether the syllable is still open:
/// tone on the first vowel while the cluster terminates the syllable, on
/// the second once anything follows. The modern-style override for oa/oe/uy
/// applies only to members of this set.
static CONSONANT_SUFFIX: Lazy<AHashSet<VowelSequence>> =
    Lazy::new(|| cluster_set(&["oa", "oe", "uy", "uơ", "ươ"]));

/// Phonotactically marginal clusters that always want a trailing consonant
/// ("tiến", "hoặc", "xuân"). They still anchor deterministically, under the
/// same positional rule as the complete set.
static INCOMPLETE: Lazy<AHashSet<VowelSequence>> =
    Lazy::new(|| cluster_set(&["iê", "yê", "oă", "uâ", "uô", "uyê"]));

/// Exact membership in the canonical cluster table.
pub fn is_valid(seq: &VowelSequence) -> bool {
    CANONICAL.contains(seq)
}

/// Number of entries in the canonical table. Exposed for diagnostics and
/// the test suite; the table itself stays private.
pub fn canonical_len() -> usize {
    CANONICAL.len()
}

/// Index of the vowel that carries the tone mark.
///
/// Total over every 1–3 vowel cluster, valid or not. The rules run in a
/// fixed precedence order and the first match wins:
///
/// 1. single vowel,
/// 2. a circumflexed vowel anywhere,
/// 3. a horned vowel anywhere (with the ư+ơ pairs special-cased),
/// 4. remaining triples anchor on the middle vowel,
/// 5. the two-vowel exception cascade,
/// 6. defensive fallback to the first vowel.
pub fn tone_anchor_index(seq: &VowelSequence, ctx: &ToneContext) -> usize {
    let vowels = seq.vowels();

    if vowels.len() == 1 {
        return 0;
    }

    // An existing letter diacritic dominates tone placement regardless of
    // how the syllable ends. A valid cluster has at most one circumflex.
    if let Some(i) = vowels.iter().position(|v| v.has_circumflex()) {
        return i;
    }

    if let Some(i) = vowels.iter().position(|v| v.has_horn()) {
        // ươ, ươi, ươu take the tone on the ơ, not the ư.
        if starts_with_horn_pair(vowels) {
            return 1;
        }
        return i;
    }

    if vowels.len() == 3 {
        // Plain triples (oai, uya, uyu, ...) anchor on the middle vowel;
        // the marked triples were already taken by the rules above.
        return 1;
    }

    if vowels.len() == 2 {
        return two_vowel_anchor(vowels[0], vowels[1], seq, ctx);
    }

    0
}

/// ư+ơ, ư+ơ+i, ư+ơ+u.
fn starts_with_horn_pair(vowels: &[Vowel]) -> bool {
    if vowels.first() != Some(&Vowel::UHorn) || vowels.get(1) != Some(&Vowel::OHorn) {
        return false;
    }
    match vowels.get(2).copied() {
        None => true,
        Some(Vowel::I) | Some(Vowel::U) => true,
        Some(_) => false,
    }
}

/// The ordered two-vowel exception cascade. Earlier arms shadow later ones;
/// a cluster matching several exceptions gets the first.
fn two_vowel_anchor(first: Vowel, second: Vowel, seq: &VowelSequence, ctx: &ToneContext) -> usize {
    use Vowel::*;

    // (a) oi, ai, ui: first vowel, unconditionally ("mọi", "mái", "múi").
    if matches!((first, second), (O, I) | (A, I) | (U, I)) {
        return 0;
    }

    // (b) ay word-final: first vowel ("máy"). With a trailing consonant the
    // general rule decides.
    if (first, second) == (A, Y) && !ctx.has_trailing_consonant {
        return 0;
    }

    // (c) oo: second vowel ("xoong").
    if (first, second) == (O, O) {
        return 1;
    }

    // (d) ưu: first vowel ("cứu").
    if (first, second) == (UHorn, U) {
        return 0;
    }

    // (e) ua word-final: first vowel ("của", "mua"); with a trailing
    // consonant, fall through.
    if (first, second) == (U, A) && !ctx.has_trailing_consonant {
        return 0;
    }

    // (f) i/y followed by a/u/o: "giạ" anchors past the gi onset, "mía"
    // keeps the tone on the i.
    if matches!(first, I | Y) && matches!(second, A | U | O) {
        return if ctx.preceding_consonant == Some(Consonant::Gi) {
            1
        } else {
            0
        };
    }

    // (g) general rule over the classification sets.
    if CONSONANT_SUFFIX.contains(seq) {
        // Modern oa/oe/uy placement fires only together with a trailing
        // consonant ("hoán"); word-final modern stays on the first vowel
        // ("hóa").
        if ctx.modern_style && ctx.has_trailing_consonant && is_modern_override(first, second) {
            return 1;
        }
        return if ctx.is_terminated() { 0 } else { 1 };
    }

    if COMPLETE.contains(seq) || INCOMPLETE.contains(seq) {
        return if ctx.has_trailing_consonant { 1 } else { 0 };
    }

    0
}

fn is_modern_override(first: Vowel, second: Vowel) -> bool {
    use Vowel::*;
    matches!((first, second), (O, A) | (O, E) | (U, Y))
}

fn substitute_checked(seq: &VowelSequence, from: Vowel, to: Vowel) -> Option<VowelSequence> {
    for (i, v) in seq.vowels().iter().enumerate() {
        if *v == from {
            let candidate = seq.with_vowel_at(i, to);
            if is_valid(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Replace `vowel` with its circumflexed form (a→â, e→ê, o→ô) and keep the
/// result only if the canonical table knows it.
pub fn add_circumflex(seq: &VowelSequence, vowel: Vowel) -> Option<VowelSequence> {
    substitute_checked(seq, vowel, vowel.with_circumflex()?)
}

/// Replace `vowel` with its breve form (a→ă), canonical-table checked.
pub fn add_breve(seq: &VowelSequence, vowel: Vowel) -> Option<VowelSequence> {
    substitute_checked(seq, vowel, vowel.with_breve()?)
}

/// Replace `vowel` with its horned form (o→ơ, u→ư), canonical-table checked.
pub fn add_horn(seq: &VowelSequence, vowel: Vowel) -> Option<VowelSequence> {
    substitute_checked(seq, vowel, vowel.with_horn()?)
}

pub fn can_add_circumflex(seq: &VowelSequence, vowel: Vowel) -> bool {
    add_circumflex(seq, vowel).is_some()
}

pub fn can_add_breve(seq: &VowelSequence, vowel: Vowel) -> bool {
    add_breve(seq, vowel).is_some()
}

pub fn can_add_horn(seq: &VowelSequence, vowel: Vowel) -> bool {
    add_horn(seq, vowel).is_some()
}

/// Word-boundary completeness: no single appended vowel yields another
/// canonical cluster, so the nucleus cannot grow any further.
///
/// Distinct from the `COMPLETE` classification used for tone placement.
pub fn is_complete(seq: &VowelSequence) -> bool {
    Vowel::ALL
        .iter()
        .all(|&v| seq.appended(v).map_or(true, |grown| !is_valid(&grown)))
}
