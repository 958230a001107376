// End-to-end translation vectors.
//
// These exercise the full prepare → substitute → emit pipeline through the
// public Translator API: longest-match precedence, buffer growth/shrink,
// locking, separator fidelity and direction symmetry.

use libvoynich_core::{Config, Direction, Translator};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn forward(items: &[(&str, &str)]) -> Translator {
    Translator::new(&pairs(items), Direction::Forward)
}

#[test]
fn longest_match_wins() {
    // The two-character pattern shares a prefix with the one-character
    // pattern and must win at position 0.
    let tr = forward(&[("a", "1"), ("ab", "2")]);
    assert_eq!(tr.translate("ab a"), "2 1");
}

#[test]
fn growth_does_not_corrupt_following_tokens() {
    let tr = forward(&[("x", "yy")]);
    assert_eq!(tr.translate("x x"), "yy yy");
}

#[test]
fn shrink_does_not_corrupt_following_tokens() {
    let tr = forward(&[("abc", "z")]);
    assert_eq!(tr.translate("abc abc"), "z z");
}

#[test]
fn empty_line_is_preserved_between_lines() {
    let tr = forward(&[("a", "b")]);
    assert_eq!(tr.translate("a\n\na"), "b\n\nb");
}

#[test]
fn unmatched_text_passes_through_unchanged() {
    // Identity law: when no rule is eligible, spacing and punctuation come
    // back exactly as written.
    let tr = forward(&[("q", "z")]);
    assert_eq!(tr.translate("some words, more. words"), "some words, more. words");
}

#[test]
fn punctuation_only_line_round_trips() {
    let tr = forward(&[("q", "z")]);
    assert_eq!(tr.translate(" .,. "), " .,. ");
}

#[test]
fn substituted_output_is_not_resubstituted() {
    // a -> b runs before the equal-length b -> c, so a fresh "b" must stay
    // "b" while an input "b" still becomes "c".
    let tr = forward(&[("a", "b"), ("b", "c")]);
    assert_eq!(tr.translate("a b"), "b c");
}

#[test]
fn direction_symmetry_round_trips() {
    let rules = [("ch", "S"), ("sh", "Z"), ("th", "T")];
    let mut tr = forward(&rules);
    let encoded = tr.translate("ch sh th");
    assert_eq!(encoded, "S Z T");
    tr.reverse_direction();
    assert_eq!(tr.translate(&encoded), "ch sh th");
}

#[test]
fn pattern_spanning_separator_keeps_it() {
    // "a#b" matches across the former space; the placeholder written by the
    // output inherits the captured separator.
    let tr = forward(&[("a#b", "x#y")]);
    assert_eq!(tr.translate("a b"), "x y");
    assert_eq!(tr.translate("a.b"), "x.y");
}

#[test]
fn last_separator_wins_across_two_separators() {
    // One pattern over two distinct separators keeps only the last one —
    // the single-sepkeep limitation, asserted rather than papered over.
    let tr = forward(&[("a#b#c", "q#r")]);
    assert_eq!(tr.translate("a b.c"), "q.r");
}

#[test]
fn custom_placeholder_behaves_like_default() {
    let config = Config {
        separator_placeholder: '%',
        ..Config::default()
    };
    let tr = Translator::with_config(&pairs(&[("a%b", "x%y")]), &config);
    assert_eq!(tr.translate("a b"), "x y");
    // A literal '#' is ordinary text under this placeholder.
    assert_eq!(tr.translate("##"), "##");
}

#[test]
fn longer_transliteration_sample() {
    // Digraph-heavy alphabet mapped to single capitals and back.
    let rules = [
        ("qo", "Q"),
        ("ch", "C"),
        ("sh", "S"),
        ("dy", "D"),
        ("o", "0"),
        ("y", "1"),
    ];
    let mut tr = forward(&rules);
    let encoded = tr.translate("qochy shody.qody");
    assert_eq!(encoded, "QC1 S0D.QD");
    tr.reverse_direction();
    assert_eq!(tr.translate(&encoded), "qochy shody.qody");
}
