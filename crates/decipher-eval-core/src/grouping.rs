//! Per-language partitioning of a corpus plus the aggregate `global` group

use crate::ingest::Corpus;
use crate::metrics::Metrics;
use crate::record::{Record, GLOBAL};
use std::collections::BTreeMap;

/// One partition of the corpus and its scores
#[derive(Debug, Clone)]
pub struct Group<'a> {
    pub records: Vec<&'a Record>,
    pub metrics: Metrics,
}

/// Metrics for every language in a corpus and for the corpus as a whole
#[derive(Debug, Clone)]
pub struct GroupedResults<'a> {
    global: Group<'a>,
    by_language: BTreeMap<&'a str, Group<'a>>,
}

impl<'a> GroupedResults<'a> {
    pub fn compute(corpus: &'a Corpus) -> Self {
        Self::compute_with_progress(corpus, |_| {})
    }

    /// Like [`GroupedResults::compute`], calling `on_group` after each group
    /// is scored (the global group first)
    pub fn compute_with_progress<F>(corpus: &'a Corpus, mut on_group: F) -> Self
    where
        F: FnMut(&str),
    {
        let all: Vec<&'a Record> = corpus.records().iter().collect();
        let global = Group {
            metrics: Metrics::compute_as(&all, GLOBAL),
            records: all,
        };
        tracing::debug!(
            "global: {} records, SER {:.4}, accuracy {:.4}",
            global.records.len(),
            global.metrics.symbol_error_rate,
            global.metrics.word_accuracy
        );
        on_group(GLOBAL);

        let mut by_language = BTreeMap::new();
        for language in corpus.languages() {
            let records: Vec<&'a Record> = corpus
                .records()
                .iter()
                .filter(|r| r.language() == language)
                .collect();

            if records.is_empty() {
                tracing::warn!("Language '{}' has no records; accuracy is undefined", language);
            }

            let metrics = Metrics::compute(&records);
            tracing::debug!(
                "{}: {} records, SER {:.4}, accuracy {:.4}",
                language,
                records.len(),
                metrics.symbol_error_rate,
                metrics.word_accuracy
            );
            on_group(language);

            by_language.insert(language.as_str(), Group { records, metrics });
        }

        Self { global, by_language }
    }

    pub fn global(&self) -> &Group<'a> {
        &self.global
    }

    /// Group for a language label, or the aggregate group for `global`
    pub fn get(&self, key: &str) -> Option<&Group<'a>> {
        if key == GLOBAL {
            Some(&self.global)
        } else {
            self.by_language.get(key)
        }
    }

    /// Language labels in sorted order, excluding `global`
    pub fn languages(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_language.keys().copied()
    }

    /// Every group in report order: languages sorted by label, then `global`
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Group<'a>)> + '_ {
        self.by_language
            .iter()
            .map(|(language, group)| (*language, group))
            .chain(std::iter::once((GLOBAL, &self.global)))
    }

    /// Number of groups including `global`
    pub fn len(&self) -> usize {
        self.by_language.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(rows: &[(&str, &str, &str)]) -> Corpus {
        rows.iter()
            .map(|(lang, reference, hypothesis)| Record::without_source(lang, reference, hypothesis))
            .collect()
    }

    #[test]
    fn test_two_languages_all_correct() {
        let corpus = corpus(&[("en", "a b", "a b"), ("fr", "c d", "c d")]);
        let results = GroupedResults::compute(&corpus);

        assert_eq!(results.global().metrics.word_accuracy, 100.0);
        assert_eq!(results.get("en").unwrap().metrics.word_accuracy, 100.0);
        assert_eq!(results.get("fr").unwrap().metrics.word_accuracy, 100.0);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_groups_partition_the_corpus() {
        let corpus = corpus(&[
            ("en", "a", "a"),
            ("fr", "b", "x"),
            ("en", "c", "c"),
            ("de", "d", "d"),
            ("fr", "e", "e"),
        ]);
        let results = GroupedResults::compute(&corpus);

        assert_eq!(results.global().records.len(), corpus.len());
        let per_language: usize = results
            .languages()
            .map(|lang| results.get(lang).unwrap().records.len())
            .sum();
        assert_eq!(per_language, corpus.len());

        for lang in results.languages() {
            let group = results.get(lang).unwrap();
            assert!(group.records.iter().all(|r| r.language() == lang));
            assert_eq!(group.metrics.language, lang);
        }
    }

    #[test]
    fn test_global_label_with_single_language() {
        let corpus = corpus(&[("yi", "a", "a"), ("yi", "b", "c")]);
        let results = GroupedResults::compute(&corpus);

        assert_eq!(results.global().metrics.language, "global");
        assert_eq!(results.get("yi").unwrap().metrics.language, "yi");
        assert_eq!(results.global().metrics, Metrics::new(0.5, 50.0, "global"));
    }

    #[test]
    fn test_global_is_micro_average() {
        let corpus = corpus(&[("en", "a b c d", "a b c d"), ("fr", "e f", "e g")]);
        let results = GroupedResults::compute(&corpus);

        assert_eq!(results.get("en").unwrap().metrics.symbol_error_rate, 0.0);
        assert_eq!(results.get("fr").unwrap().metrics.symbol_error_rate, 0.5);
        assert_eq!(results.global().metrics.symbol_error_rate, 0.16667);
    }

    #[test]
    fn test_report_order_is_sorted_then_global() {
        let corpus = corpus(&[("zh", "a", "a"), ("ar", "b", "b"), ("en", "c", "c")]);
        let results = GroupedResults::compute(&corpus);
        let order: Vec<&str> = results.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["ar", "en", "zh", "global"]);
    }

    #[test]
    fn test_progress_called_per_group() {
        let corpus = corpus(&[("en", "a", "a"), ("fr", "b", "b")]);
        let mut seen = Vec::new();
        GroupedResults::compute_with_progress(&corpus, |name| seen.push(name.to_string()));
        assert_eq!(seen, vec!["global", "en", "fr"]);
    }

    #[test]
    fn test_empty_corpus_has_only_global() {
        let corpus = Corpus::default();
        let results = GroupedResults::compute(&corpus);
        assert_eq!(results.len(), 1);
        assert!(results.global().metrics.word_accuracy.is_nan());
        assert!(results.get("en").is_none());
    }
}
