//! Token-level Levenshtein distance

/// Minimum number of substitutions, deletions and insertions turning
/// `reference` into `hypothesis`
pub fn edit_distance<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> usize {
    if reference.is_empty() {
        return hypothesis.len();
    }
    if hypothesis.is_empty() {
        return reference.len();
    }

    // Two rolling rows of the DP table
    let mut prev: Vec<usize> = (0..=hypothesis.len()).collect();
    let mut curr = vec![0usize; hypothesis.len() + 1];

    for (i, ref_tok) in reference.iter().enumerate() {
        curr[0] = i + 1;
        for (j, hyp_tok) in hypothesis.iter().enumerate() {
            let cost = if ref_tok == hyp_tok { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[hypothesis.len()]
}

/// Space-delimited symbols; runs of spaces count as one delimiter.
/// Tabs and other whitespace stay inside a symbol.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').filter(|tok| !tok.is_empty()).collect()
}

/// Corpus-level error counts, summed over many reference/hypothesis pairs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorTally {
    pub edits: usize,
    pub reference_tokens: usize,
}

impl ErrorTally {
    /// Add one pair, tokenized on spaces
    pub fn add(&mut self, reference: &str, hypothesis: &str) {
        let ref_tokens = tokenize(reference);
        let hyp_tokens = tokenize(hypothesis);

        self.edits += edit_distance(&ref_tokens, &hyp_tokens);
        self.reference_tokens += ref_tokens.len();
    }

    /// Total edits over total reference tokens.
    ///
    /// With no reference tokens at all the rate is 0.0 if nothing was
    /// inserted and 1.0 otherwise.
    pub fn rate(&self) -> f64 {
        if self.reference_tokens == 0 {
            return if self.edits == 0 { 0.0 } else { 1.0 };
        }
        self.edits as f64 / self.reference_tokens as f64
    }
}
