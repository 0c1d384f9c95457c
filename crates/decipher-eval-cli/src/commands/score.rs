//! Score command - read inputs, compute grouped metrics, write the report

use anyhow::{Context, Result};
use clap::Args;
use console::{style, Term};
use decipher_eval_core::report::{self, OutputFormat, OutputTarget};
use decipher_eval_core::{AlignedPaths, AlignmentPolicy, Config, Corpus, GroupedResults};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Gold references, one per line
    #[arg(long = "references-path", visible_aliases = ["gold-path", "ref", "gold"])]
    pub references_path: Option<PathBuf>,

    /// System hypotheses, one per line
    #[arg(long = "hypotheses-path", visible_alias = "hyp")]
    pub hypotheses_path: Option<PathBuf>,

    /// Source lines, one per line
    #[arg(long = "source-path", visible_alias = "src")]
    pub source_path: Option<PathBuf>,

    /// Language label for each line
    #[arg(long = "languages-path", visible_alias = "langs")]
    pub languages_path: Option<PathBuf>,

    /// Combined TSV (reference, hypothesis, source, language); overrides the four paths above
    #[arg(long = "combined-tsv-path", visible_alias = "tsv")]
    pub combined_tsv_path: Option<PathBuf>,

    /// Where to write scores (default: stdout)
    #[arg(long = "score-output-path", visible_alias = "score")]
    pub score_output_path: Option<PathBuf>,

    /// Write a Language/SER/Accuracy table
    #[arg(long, conflicts_with = "output_as_json")]
    pub output_as_tsv: bool,

    /// Write a JSON object keyed by language
    #[arg(long)]
    pub output_as_json: bool,

    /// Fail if the aligned input files have different line counts
    #[arg(long)]
    pub strict: bool,

    /// Skip the first row of the combined TSV
    #[arg(long)]
    pub tsv_header: bool,
}

impl ScoreArgs {
    /// Format selected on the command line, if any
    pub fn output_format(&self) -> Option<OutputFormat> {
        if self.output_as_tsv {
            Some(OutputFormat::Tsv)
        } else if self.output_as_json {
            Some(OutputFormat::Json)
        } else {
            None
        }
    }

    fn has_aligned_paths(&self) -> bool {
        self.references_path.is_some()
            || self.hypotheses_path.is_some()
            || self.source_path.is_some()
            || self.languages_path.is_some()
    }

    /// All four aligned paths, or an error naming the missing flags
    pub fn aligned_paths(&self) -> Result<AlignedPaths> {
        match (
            &self.references_path,
            &self.hypotheses_path,
            &self.source_path,
            &self.languages_path,
        ) {
            (Some(references), Some(hypotheses), Some(sources), Some(languages)) => {
                Ok(AlignedPaths {
                    references: references.clone(),
                    hypotheses: hypotheses.clone(),
                    sources: sources.clone(),
                    languages: languages.clone(),
                })
            }
            _ => {
                let missing: Vec<&str> = [
                    ("--references-path", self.references_path.is_none()),
                    ("--hypotheses-path", self.hypotheses_path.is_none()),
                    ("--source-path", self.source_path.is_none()),
                    ("--languages-path", self.languages_path.is_none()),
                ]
                .into_iter()
                .filter(|(_, is_missing)| *is_missing)
                .map(|(flag, _)| flag)
                .collect();

                anyhow::bail!(
                    "Missing input: {}. Pass all four aligned files or --combined-tsv-path",
                    missing.join(", ")
                )
            }
        }
    }
}

fn load_corpus(config: &Config, args: &ScoreArgs) -> Result<Corpus> {
    if let Some(tsv_path) = &args.combined_tsv_path {
        if args.has_aligned_paths() {
            tracing::warn!("--combined-tsv-path given, ignoring aligned input paths");
        }
        let has_header = args.tsv_header || config.tsv_has_header;
        return Corpus::from_combined_tsv_path(tsv_path, has_header)
            .with_context(|| format!("Failed to load combined TSV {:?}", tsv_path));
    }

    let paths = args.aligned_paths()?;
    let policy = if args.strict {
        AlignmentPolicy::Strict
    } else {
        config.alignment
    };
    Corpus::from_aligned_paths(&paths, policy).context("Failed to load aligned input files")
}

pub fn run(config: &Config, args: &ScoreArgs) -> Result<()> {
    let term = Term::stderr();

    let corpus = load_corpus(config, args)?;
    term.write_line(&format!(
        "{} Loaded {} records in {} languages",
        style("✓").green(),
        style(corpus.len()).cyan(),
        style(corpus.languages().len()).cyan()
    ))?;

    // One tick per language plus the global group
    let pb = if config.show_progress {
        ProgressBar::new(corpus.languages().len() as u64 + 1)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let results = GroupedResults::compute_with_progress(&corpus, |group| {
        pb.set_message(group.to_string());
        pb.inc(1);
    });
    pb.finish_and_clear();

    let format = args.output_format().unwrap_or(config.output_format);
    let target = OutputTarget::from_path(args.score_output_path.clone());
    report::write_report(&results, format, &target).context("Failed to write scores")?;

    if let OutputTarget::File(path) = &target {
        term.write_line(&format!(
            "{} Wrote {} scores to {}",
            style("✓").green(),
            format.display_name(),
            path.display()
        ))?;
    }

    Ok(())
}
