use diktat::domain::{COMMA, TranscriptNormalizer, vocabulary_for};

fn croatian() -> TranscriptNormalizer {
    TranscriptNormalizer::for_locale("hr-HR")
}

#[test]
fn given_digit_and_comma_words_when_normalizing_then_substitutes_symbols() {
    let result = croatian().normalize(&["tri", "zarez", "pet"]);

    assert_eq!(result, vec!["3", ",", "5"]);
}

#[test]
fn given_mixed_case_words_when_normalizing_then_only_lowercases() {
    let result = croatian().normalize(&["LOT", "Potvrda"]);

    assert_eq!(result, vec!["lot", "potvrda"]);
}

#[test]
fn given_all_croatian_digit_words_when_normalizing_then_maps_zero_through_nine() {
    let words = [
        "nula", "jedan", "dva", "tri", "četiri", "pet", "šest", "sedam", "osam", "devet",
    ];

    let result = croatian().normalize(&words);

    assert_eq!(result, vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
}

#[test]
fn given_uppercase_diacritic_digit_word_when_normalizing_then_maps_to_digit() {
    let result = croatian().normalize(&["ČETIRI", "Šest"]);

    assert_eq!(result, vec!["4", "6"]);
}

#[test]
fn given_all_comma_synonyms_when_normalizing_then_each_becomes_comma() {
    let result = croatian().normalize(&["zarez", "Zareza", "ZAREZI", "zares"]);

    assert!(result.iter().all(|t| t == COMMA));
}

#[test]
fn given_word_containing_digit_word_when_normalizing_then_left_unchanged() {
    let result = croatian().normalize(&["petak", "trideset", "zarezati"]);

    assert_eq!(result, vec!["petak", "trideset", "zarezati"]);
}

#[test]
fn given_any_words_when_normalizing_then_length_and_order_preserved() {
    let words = ["Dobar", "dan", "", "tri", "  ", "zarez", "LOT", "sedam"];

    let result = croatian().normalize(&words);

    assert_eq!(result.len(), words.len());
    assert_eq!(result, vec!["dobar", "dan", "", "3", "  ", ",", "lot", "7"]);
}

#[test]
fn given_normalized_output_when_normalizing_again_then_unchanged() {
    let normalizer = croatian();
    let once = normalizer.normalize(&["Let", "DVA", "zarez", "Osam", "potvrda"]);

    let twice = normalizer.normalize(&once);

    assert_eq!(once, twice);
}

#[test]
fn given_empty_input_when_normalizing_then_returns_empty() {
    let words: [&str; 0] = [];

    assert!(croatian().normalize(&words).is_empty());
}

#[test]
fn given_english_locale_when_normalizing_then_uses_english_vocabulary() {
    let normalizer = TranscriptNormalizer::for_locale("en-US");

    let result = normalizer.normalize(&["Three", "comma", "tri"]);

    assert_eq!(result, vec!["3", ",", "tri"]);
}

#[test]
fn given_unknown_locale_when_normalizing_then_only_lowercases() {
    let normalizer = TranscriptNormalizer::for_locale("de-DE");

    let result = normalizer.normalize(&["Drei", "tri", "ZAREZ"]);

    assert_eq!(result, vec!["drei", "tri", "zarez"]);
}

#[test]
fn given_locale_spelling_variants_when_looking_up_then_all_resolve() {
    assert!(vocabulary_for("hr").is_some());
    assert!(vocabulary_for("hr_HR").is_some());
    assert!(vocabulary_for("HR-hr").is_some());
    assert!(vocabulary_for("sr-RS").is_none());
}

#[test]
fn given_english_word_resembling_comma_when_normalizing_then_left_unchanged() {
    let normalizer = TranscriptNormalizer::for_locale("en-US");

    let result = normalizer.normalize(&["patient", "in", "a", "coma"]);

    assert_eq!(result, vec!["patient", "in", "a", "coma"]);
}
