use std::collections::HashMap;
use std::sync::LazyLock;

pub const COMMA: &str = ",";

/// Spoken forms recognised for one locale.
#[derive(Debug)]
pub struct LocaleVocabulary {
    digits: HashMap<&'static str, &'static str>,
    comma_synonyms: &'static [&'static str],
}

impl LocaleVocabulary {
    fn new(digit_words: [&'static str; 10], comma_synonyms: &'static [&'static str]) -> Self {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

        Self {
            digits: digit_words.into_iter().zip(DIGITS).collect(),
            comma_synonyms,
        }
    }

    fn substitute(&self, token: &str) -> Option<&'static str> {
        if let Some(digit) = self.digits.get(token) {
            return Some(*digit);
        }
        self.comma_synonyms.contains(&token).then_some(COMMA)
    }
}

static CROATIAN: LazyLock<LocaleVocabulary> = LazyLock::new(|| {
    LocaleVocabulary::new(
        [
            "nula", "jedan", "dva", "tri", "četiri", "pet", "šest", "sedam", "osam", "devet",
        ],
        &["zarez", "zareza", "zarezi", "zares"],
    )
});

static ENGLISH: LazyLock<LocaleVocabulary> = LazyLock::new(|| {
    LocaleVocabulary::new(
        [
            "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
        ],
        &["comma"],
    )
});

/// Looks up the vocabulary by the language subtag, so `hr`, `hr-HR` and `hr_hr` all match.
pub fn vocabulary_for(locale: &str) -> Option<&'static LocaleVocabulary> {
    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match language.as_str() {
        "hr" => Some(&*CROATIAN),
        "en" => Some(&*ENGLISH),
        _ => None,
    }
}

/// Rewrites recognised word tokens for display.
///
/// Each token is lower-cased, then replaced by a digit if it spells one, or by
/// a comma if it names one. Matching is on the whole token only and never looks
/// at neighbouring tokens, so the output always has the input's length and order.
/// Locales without a vocabulary are only lower-cased.
#[derive(Debug, Clone, Copy)]
pub struct TranscriptNormalizer {
    vocabulary: Option<&'static LocaleVocabulary>,
}

impl TranscriptNormalizer {
    pub fn for_locale(locale: &str) -> Self {
        Self {
            vocabulary: vocabulary_for(locale),
        }
    }

    pub fn normalize<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words
            .iter()
            .map(|word| self.normalize_token(word.as_ref()))
            .collect()
    }

    pub fn normalize_token(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        match self.vocabulary.and_then(|v| v.substitute(&lowered)) {
            Some(replacement) => replacement.to_string(),
            None => lowered,
        }
    }
}
