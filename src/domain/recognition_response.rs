#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedWord {
    pub word: String,
}

impl RecognizedWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

/// One ranked hypothesis for a segment of audio.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionAlternative {
    pub transcript: String,
    pub confidence: f64,
    pub words: Vec<RecognizedWord>,
}

impl RecognitionAlternative {
    /// Word tokens in temporal order, lower-cased.
    pub fn word_tokens(&self) -> Vec<String> {
        self.words.iter().map(|w| w.word.to_lowercase()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionSegment {
    pub alternatives: Vec<RecognitionAlternative>,
}

/// Everything the recognizer returned for one request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionResponse {
    pub results: Vec<RecognitionSegment>,
}

impl RecognitionResponse {
    pub fn new(results: Vec<RecognitionSegment>) -> Self {
        Self { results }
    }

    pub fn single(alternative: RecognitionAlternative) -> Self {
        Self {
            results: vec![RecognitionSegment {
                alternatives: vec![alternative],
            }],
        }
    }

    /// Best alternative of the first result, if the recognizer produced one.
    pub fn best_alternative(&self) -> Option<&RecognitionAlternative> {
        self.results.first()?.alternatives.first()
    }
}
