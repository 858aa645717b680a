// Tone-anchor placement vectors.
//
// These exercise the full precedence cascade: letter diacritics first
// (circumflex, then horn with the ư+ơ pairs), then the triple default,
// then the ordered two-vowel exception list, then the classification-based
// general rule. Each block names the real words the convention comes from;
// the anchor index is what a native typist expects the tone mark to land on.

use libviet_core::validator::{tone_anchor_index, ToneContext};
use libviet_core::{Composer, Config, Consonant, Tone, VowelSequence};

fn seq(s: &str) -> VowelSequence {
    s.parse().unwrap()
}

fn pos(cluster: &str, ctx: &ToneContext) -> usize {
    tone_anchor_index(&seq(cluster), ctx)
}

fn open() -> ToneContext {
    ToneContext::default()
}

fn closed() -> ToneContext {
    ToneContext {
        has_trailing_consonant: true,
        ..ToneContext::default()
    }
}

#[test]
fn single_vowel_anchors_on_itself() {
    for s in ["a", "ă", "â", "e", "ê", "i", "o", "ô", "ơ", "u", "ư", "y"] {
        assert_eq!(pos(s, &open()), 0, "single {s}");
        assert_eq!(pos(s, &closed()), 0, "single {s} with coda");
    }
}

#[test]
fn circumflex_dominates() {
    // đậu, mấy, Huế, chuối, nhiều, khuấy, khuyến
    assert_eq!(pos("âu", &open()), 0);
    assert_eq!(pos("ây", &open()), 0);
    assert_eq!(pos("uê", &open()), 1);
    assert_eq!(pos("uôi", &open()), 1);
    assert_eq!(pos("iêu", &open()), 1);
    assert_eq!(pos("uây", &open()), 1);
    assert_eq!(pos("uyê", &closed()), 2);
    // position is independent of the coda for marked vowels
    assert_eq!(pos("uôi", &closed()), 1);
}

#[test]
fn horn_pairs_anchor_on_the_o() {
    // nước, người, rượu: ư+ơ places the tone on the ơ, not the ư
    for ctx in [open(), closed()] {
        assert_eq!(pos("ươ", &ctx), 1);
        assert_eq!(pos("ươi", &ctx), 1);
        assert_eq!(pos("ươu", &ctx), 1);
    }
}

#[test]
fn other_horn_clusters_anchor_on_the_horn() {
    assert_eq!(pos("ưa", &open()), 0); // mưa, mứa
    assert_eq!(pos("ưi", &open()), 0); // chửi
    assert_eq!(pos("ơi", &open()), 0); // mới
    assert_eq!(pos("uơ", &open()), 1); // thuở
    assert_eq!(pos("ưu", &open()), 0); // cứu
}

#[test]
fn plain_triples_anchor_in_the_middle() {
    assert_eq!(pos("oai", &open()), 1); // xoài
    assert_eq!(pos("oay", &open()), 1); // xoáy
    assert_eq!(pos("uya", &open()), 1); // khuya + tone
    assert_eq!(pos("uyu", &closed()), 1); // khuỷu
}

#[test]
fn oi_ai_ui_always_first() {
    for ctx in [open(), closed()] {
        assert_eq!(pos("oi", &ctx), 0); // mọi
        assert_eq!(pos("ai", &ctx), 0); // mái
        assert_eq!(pos("ui", &ctx), 0); // múi
    }
}

#[test]
fn ay_depends_on_the_coda() {
    assert_eq!(pos("ay", &open()), 0); // máy
    assert_eq!(pos("ay", &closed()), 1); // falls through to the general rule
}

#[test]
fn oo_anchors_second() {
    assert_eq!(pos("oo", &open()), 1); // xoong
    assert_eq!(pos("oo", &closed()), 1);
}

#[test]
fn ua_word_final_vs_closed() {
    assert_eq!(pos("ua", &open()), 0); // của, mua
    assert_eq!(pos("ua", &closed()), 1); // general-rule fallthrough
}

#[test]
fn gi_onset_pushes_the_tone_right() {
    let gi = ToneContext {
        preceding_consonant: Some(Consonant::Gi),
        ..ToneContext::default()
    };
    let plain = open();
    let other_onset = ToneContext {
        preceding_consonant: Some(Consonant::M),
        ..ToneContext::default()
    };
    assert_eq!(pos("ia", &gi), 1); // giạ
    assert_eq!(pos("ia", &plain), 0); // mía
    assert_eq!(pos("ia", &other_onset), 0);
    assert_eq!(pos("iu", &gi), 1);
    assert_eq!(pos("iu", &plain), 0); // dịu
    // clusters outside the canonical table still anchor deterministically
    assert_eq!(pos("io", &gi), 1); // giọ
    assert_eq!(pos("ya", &plain), 0);
}

#[test]
fn consonant_suffix_clusters_follow_termination() {
    // hóa / hoán
    assert_eq!(pos("oa", &open()), 0);
    assert_eq!(pos("oa", &closed()), 1);
    // khỏe / khoẻn-style closure
    assert_eq!(pos("oe", &open()), 0);
    assert_eq!(pos("oe", &closed()), 1);
    // thúy / quýt
    assert_eq!(pos("uy", &open()), 0);
    assert_eq!(pos("uy", &closed()), 1);
}

#[test]
fn pass_through_after_vowels_unterminates_the_cluster() {
    let after_digit = ToneContext {
        has_passthrough_after_vowels: true,
        ..ToneContext::default()
    };
    assert_eq!(pos("oa", &after_digit), 1);
    assert_eq!(pos("uy", &after_digit), 1);
    // the named exceptions ignore the pass-through flag
    assert_eq!(pos("ai", &after_digit), 0);
    assert_eq!(pos("ua", &after_digit), 0);
}

#[test]
fn modern_style_override_requires_a_coda() {
    let modern_closed = ToneContext {
        modern_style: true,
        has_trailing_consonant: true,
        ..ToneContext::default()
    };
    let modern_open = ToneContext {
        modern_style: true,
        ..ToneContext::default()
    };
    assert_eq!(pos("oa", &modern_closed), 1); // hoán
    assert_eq!(pos("oe", &modern_closed), 1);
    assert_eq!(pos("uy", &modern_closed), 1);
    assert_eq!(pos("oa", &modern_open), 0); // hóa, even in modern style
    // the override names only oa/oe/uy; ươ is untouched by the flag
    assert_eq!(pos("ươ", &modern_closed), 1);
}

#[test]
fn complete_clusters_shift_with_the_coda() {
    assert_eq!(pos("ao", &open()), 0); // báo
    assert_eq!(pos("eo", &open()), 0); // kẹo
    assert_eq!(pos("ao", &closed()), 1);
    assert_eq!(pos("eo", &closed()), 1);
}

#[test]
fn unknown_clusters_get_a_best_effort_anchor() {
    // invalid mid-construction clusters must not panic and default left
    assert_eq!(pos("ae", &open()), 0);
    assert_eq!(pos("ae", &closed()), 0);
    assert_eq!(pos("ou", &open()), 0);
}

#[test]
fn composed_words_read_correctly() {
    let composer = Composer::new(Config::default());
    let open = ToneContext::default();
    let gi = ToneContext {
        preceding_consonant: Some(Consonant::Gi),
        ..ToneContext::default()
    };
    let closed = ToneContext {
        has_trailing_consonant: true,
        ..ToneContext::default()
    };

    // của
    assert_eq!(
        composer.compose_cluster(&seq("ua"), Tone::HookAbove, false, &open),
        "ủa"
    );
    // mùa
    assert_eq!(
        composer.compose_cluster(&seq("ua"), Tone::Grave, false, &open),
        "ùa"
    );
    // nước (nucleus only)
    assert_eq!(
        composer.compose_cluster(&seq("ươ"), Tone::Acute, false, &closed),
        "ướ"
    );
    // người
    assert_eq!(
        composer.compose_cluster(&seq("ươi"), Tone::Grave, false, &open),
        "ười"
    );
    // chuối
    assert_eq!(
        composer.compose_cluster(&seq("uôi"), Tone::Acute, false, &open),
        "uối"
    );
    // nhiều
    assert_eq!(
        composer.compose_cluster(&seq("iêu"), Tone::Grave, false, &open),
        "iều"
    );
    // giá
    assert_eq!(
        composer.compose_cluster(&seq("ia"), Tone::Acute, false, &gi),
        "iá"
    );
    // khuỷu
    assert_eq!(
        composer.compose_cluster(&seq("uyu"), Tone::HookAbove, false, &open),
        "uỷu"
    );
}
