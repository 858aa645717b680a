//! High-level seam between the keystroke/buffer layer and the rule engine.
//!
//! The `Composer` owns the active [`Config`] and answers the two questions
//! the typing engine asks after every keystroke: where in the current vowel
//! cluster does the tone land, and what text does a character unit render
//! to. It holds no per-syllable state; every call is a pure function of its
//! arguments plus the immutable config.

use tracing::trace;

use crate::character::{VnChar, VowelSequence};
use crate::charset;
use crate::phoneme::Tone;
use crate::validator::{self, ToneContext};
use crate::Config;

#[derive(Debug, Clone, Default)]
pub struct Composer {
    config: Config,
}

impl Composer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Membership of the cluster in the canonical table.
    pub fn is_valid(&self, seq: &VowelSequence) -> bool {
        validator::is_valid(seq)
    }

    /// Tone anchor for the current cluster. The `modern_style` field of the
    /// context is overridden by the configured preference, so callers only
    /// describe the syllable, not the user's settings.
    pub fn anchor_index(&self, seq: &VowelSequence, ctx: &ToneContext) -> usize {
        let ctx = ToneContext {
            modern_style: self.config.modern_style,
            ..*ctx
        };
        let index = validator::tone_anchor_index(seq, &ctx);
        trace!(cluster = %seq, index, "tone anchor");
        index
    }

    /// Render one character unit into the configured code table.
    pub fn render(&self, ch: &VnChar) -> String {
        charset::render(ch, self.config.code_table)
    }

    /// Anchor the tone in `seq` and render the anchored vowel: the pair of
    /// outputs the buffer layer consumes after each keystroke.
    pub fn compose_vowel(
        &self,
        seq: &VowelSequence,
        tone: Tone,
        uppercase: bool,
        ctx: &ToneContext,
    ) -> (usize, String) {
        let index = self.anchor_index(seq, ctx);
        let rendered = match seq.get(index) {
            Some(vowel) => self.render(&VnChar::vowel(vowel, tone, uppercase)),
            None => String::new(),
        };
        (index, rendered)
    }

    /// Render the whole cluster with the tone placed on its anchor vowel.
    /// Convenience for previews and tests; the buffer layer itself edits
    /// single characters.
    pub fn compose_cluster(
        &self,
        seq: &VowelSequence,
        tone: Tone,
        uppercase: bool,
        ctx: &ToneContext,
    ) -> String {
        let index = self.anchor_index(seq, ctx);
        let mut out = String::new();
        for (i, vowel) in seq.iter().enumerate() {
            let t = if i == index { tone } else { Tone::Level };
            out.push_str(&self.render(&VnChar::vowel(vowel, t, uppercase)));
        }
        out
    }

    /// Exposed so front-ends can probe whether the nucleus can still grow.
    pub fn is_complete(&self, seq: &VowelSequence) -> bool {
        validator::is_complete(seq)
    }
}
