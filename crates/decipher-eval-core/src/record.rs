//! A single scored line: language, gold reference, system hypothesis and source

/// Name of the aggregate group covering every record
pub const GLOBAL: &str = "global";

/// One transliteration/decipherment output paired with its gold reference.
///
/// Fields are trimmed on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    language: String,
    reference: String,
    hypothesis: String,
    source: String,
}

impl Record {
    pub fn new(
        language: &str,
        reference: &str,
        hypothesis: &str,
        source: &str,
    ) -> Self {
        Self {
            language: language.trim().to_string(),
            reference: reference.trim().to_string(),
            hypothesis: hypothesis.trim().to_string(),
            source: source.trim().to_string(),
        }
    }

    /// Record without source text
    pub fn without_source(language: &str, reference: &str, hypothesis: &str) -> Self {
        Self::new(language, reference, hypothesis, "")
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn hypothesis(&self) -> &str {
        &self.hypothesis
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Full-string exact match between reference and hypothesis
    pub fn is_exact_match(&self) -> bool {
        self.reference == self.hypothesis
    }
}
