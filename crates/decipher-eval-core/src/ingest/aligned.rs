//! Four line-aligned text files: references, hypotheses, sources, language labels

use super::{AlignmentPolicy, Corpus};
use crate::error::EvalError;
use crate::record::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const STREAM_NAMES: [&str; 4] = ["reference", "hypothesis", "source", "language"];

/// Locations of the four aligned input files
#[derive(Debug, Clone)]
pub struct AlignedPaths {
    pub references: PathBuf,
    pub hypotheses: PathBuf,
    pub sources: PathBuf,
    pub languages: PathBuf,
}

fn open_text(path: &Path) -> Result<BufReader<File>, EvalError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| EvalError::Open {
            path: path.to_path_buf(),
            source,
        })
}

impl Corpus {
    /// Read four line-aligned UTF-8 files
    pub fn from_aligned_paths(
        paths: &AlignedPaths,
        policy: AlignmentPolicy,
    ) -> Result<Self, EvalError> {
        let corpus = Self::from_aligned_readers(
            open_text(&paths.references)?,
            open_text(&paths.hypotheses)?,
            open_text(&paths.sources)?,
            open_text(&paths.languages)?,
            policy,
        )?;

        tracing::info!(
            "Read {} records ({} languages) from {:?}",
            corpus.len(),
            corpus.languages().len(),
            paths.references
        );
        Ok(corpus)
    }

    /// Read four aligned streams in lockstep, one record per line
    pub fn from_aligned_readers<R: BufRead>(
        references: R,
        hypotheses: R,
        sources: R,
        languages: R,
        policy: AlignmentPolicy,
    ) -> Result<Self, EvalError> {
        let mut streams = [
            references.lines(),
            hypotheses.lines(),
            sources.lines(),
            languages.lines(),
        ];

        let mut corpus = Corpus::default();
        let mut line: u64 = 0;

        loop {
            let mut fields: [Option<String>; 4] = Default::default();
            for (i, (slot, lines)) in fields.iter_mut().zip(streams.iter_mut()).enumerate() {
                *slot = lines.next().transpose().map_err(|source| EvalError::Read {
                    stream: STREAM_NAMES[i].to_string(),
                    source,
                })?;
            }

            match fields {
                [Some(reference), Some(hypothesis), Some(source), Some(language)] => {
                    line += 1;
                    corpus.push(Record::new(&language, &reference, &hypothesis, &source), line)?;
                }
                [None, None, None, None] => break,
                partial => {
                    let exhausted: Vec<&str> = partial
                        .iter()
                        .zip(STREAM_NAMES)
                        .filter(|(field, _)| field.is_none())
                        .map(|(_, name)| name)
                        .collect();

                    match policy {
                        AlignmentPolicy::Truncate => {
                            tracing::warn!(
                                "Unequal input lengths: {} ended after {} lines, remaining lines ignored",
                                exhausted.join(", "),
                                line
                            );
                        }
                        AlignmentPolicy::Strict => {
                            let mut counts = [line as usize; 4];
                            for (i, lines) in streams.iter_mut().enumerate() {
                                if partial[i].is_none() {
                                    continue;
                                }
                                counts[i] += 1;
                                for next in lines.by_ref() {
                                    next.map_err(|source| EvalError::Read {
                                        stream: STREAM_NAMES[i].to_string(),
                                        source,
                                    })?;
                                    counts[i] += 1;
                                }
                            }
                            return Err(EvalError::MisalignedInputs {
                                reference: counts[0],
                                hypothesis: counts[1],
                                src: counts[2],
                                languages: counts[3],
                            });
                        }
                    }
                    break;
                }
            }
        }

        Ok(corpus)
    }
}
