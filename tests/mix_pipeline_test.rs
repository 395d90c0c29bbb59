//! End-to-end tests for the vowel disguise pipeline.

use std::sync::Arc;

use garble::cipher::alphabet::VowelAlphabet;
use garble::cipher::substitute::apply_map;
use garble::lemma::static_map::StaticResolver;
use garble::mixer::VowelMixer;

#[test]
fn mix_whole_sentence_is_deterministic_across_instances() {
    let text = "The mice were running through the garden, quickly.";

    let first = VowelMixer::new().mix(text).unwrap();
    let second = VowelMixer::new().mix(text).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), text.len());
}

#[test]
fn inflections_of_one_lemma_move_vowels_consistently() {
    let resolver = StaticResolver::from_entries([
        ("run", "run"),
        ("running", "run"),
        ("runs", "run"),
    ]);
    let mixer = VowelMixer::with_resolver(Arc::new(resolver));

    let map = mixer.permutation_for_lemma("run");
    let mixed = mixer.mix("run running runs").unwrap();

    let expected = format!(
        "{} {} {}",
        apply_map("run", &map),
        apply_map("running", &map),
        apply_map("runs", &map)
    );
    assert_eq!(mixed, expected);
}

#[test]
fn unresolved_tokens_survive_untouched() {
    let resolver = StaticResolver::from_entries([("garden", "garden")]);
    let mixer = VowelMixer::with_resolver(Arc::new(resolver));

    let mixed = mixer.mix("xyzzy garden xyzzy").unwrap();

    let map = mixer.permutation_for_lemma("garden");
    let garden = apply_map("garden", &map);
    assert_eq!(mixed, format!("xyzzy {garden} xyzzy"));
}

#[test]
fn substring_tokens_follow_the_documented_replacement_order() {
    // "in" sorts before "inside", so the shorter token is replaced first
    // and rewrites the "in" at the head of "inside" — after that the
    // literal spelling "inside" no longer exists in the buffer, and the
    // longer token's own substitution never lands. The expected string is
    // built from the cipher primitives alone, so it predicts the collided
    // output rather than replaying the rewriter's algorithm: a span-based
    // rewrite (or any other replacement order) would produce
    // "{r_in} {r_inside}" instead and fail this assertion.
    let resolver = StaticResolver::from_entries([("in", "in"), ("inside", "inside")]);
    let mixer = VowelMixer::with_resolver(Arc::new(resolver));

    let r_in = apply_map("in", &mixer.permutation_for_lemma("in"));
    let r_inside = apply_map("inside", &mixer.permutation_for_lemma("inside"));

    let expected = if r_in != "in" {
        // The head of "inside" is rewritten by the earlier, shorter token.
        format!("{r_in} {r_in}side")
    } else {
        // "in" mapped to itself, so "inside" survives to its own turn.
        format!("in {r_inside}")
    };

    let mixed = mixer.mix("in inside").unwrap();
    assert_eq!(mixed, expected);

    if r_in != "in" {
        // The collided output provably differs from the span-based result:
        // equality would force map_inside('i') == 'i' and r_in == "in".
        assert_ne!(mixed, format!("{r_in} {r_inside}"));
    }
}

#[test]
fn uppercase_vowels_and_punctuation_are_never_rewritten() {
    let mixer = VowelMixer::new();
    let text = "AEIOU, OK? 123!";

    let mixed = mixer.mix(text).unwrap();

    for (a, b) in text.chars().zip(mixed.chars()) {
        if !matches!(a, 'a' | 'e' | 'i' | 'o' | 'u') {
            assert_eq!(a, b, "{a:?} must pass through unchanged");
        }
    }
}

#[test]
fn custom_alphabet_extends_the_substitution_domain() {
    let resolver = StaticResolver::from_entries([("rhythm", "rhythm")]);
    let alphabet = VowelAlphabet::new("aeiouy".chars()).unwrap();
    let mixer = VowelMixer::with_resolver(Arc::new(resolver)).with_alphabet(alphabet);

    let map = mixer.permutation_for_lemma("rhythm");
    let mixed = mixer.mix("rhythm").unwrap();

    assert_eq!(mixed, apply_map("rhythm", &map));
}

#[test]
fn empty_and_whitespace_inputs() {
    let mixer = VowelMixer::new();

    assert_eq!(mixer.mix("").unwrap(), "");
    // No distinct tokens means no substitutions.
    assert_eq!(mixer.mix("   ").unwrap(), "   ");
}

#[test]
fn repeated_mixing_is_stable_within_a_process() {
    let mixer = VowelMixer::new();
    let text = "she walked and he walks while they walk";

    let outputs: Vec<String> = (0..5).map(|_| mixer.mix(text).unwrap()).collect();
    assert!(outputs.iter().all(|o| *o == outputs[0]));
}
