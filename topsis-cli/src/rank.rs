//! Rank command implementation for the TOPSIS CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use topsis_core::{Alternative, Impacts, RankingPolicy, Weights, evaluate_with};
use topsis_io::{ExportFormat, ResultTable, export_result, read_decision_table};

use crate::{
    ARG_FORMAT, ARG_IMPACTS, ARG_INPUT, ARG_MAX_ALTERNATIVES, ARG_OUTPUT, ARG_TIES, ARG_WEIGHTS,
    CliError, ENV_IMPACTS, ENV_INPUT, ENV_WEIGHTS,
};

/// Result serialisation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Input columns plus score and rank, as CSV.
    Csv,
    /// One JSON object per alternative.
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// How alternatives with identical scores are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TiePolicy {
    /// Ties share a rank and the next rank skips ahead (1, 2, 2, 4).
    Competition,
    /// Ties share a rank and the next rank follows on (1, 2, 2, 3).
    Dense,
}

impl From<TiePolicy> for RankingPolicy {
    fn from(policy: TiePolicy) -> Self {
        match policy {
            TiePolicy::Competition => Self::Competition,
            TiePolicy::Dense => Self::Dense,
        }
    }
}

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Rank the alternatives in a CSV decision table. The first \
                 column holds alternative labels and every other column a \
                 numeric criterion. The table is written back with \
                 `Topsis Score` and `Rank` columns appended, to --output or \
                 standard output.",
    about = "Score and rank a CSV decision table"
)]
#[ortho_config(prefix = "TOPSIS")]
pub(crate) struct RankArgs {
    /// Path to the CSV decision table.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Comma-separated criterion weights, e.g. "1,1,2".
    #[arg(long = ARG_WEIGHTS, value_name = "list")]
    #[serde(default)]
    pub(crate) weights: Option<String>,
    /// Comma-separated impacts, `+` to maximise and `-` to minimise.
    #[arg(long = ARG_IMPACTS, value_name = "list", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) impacts: Option<String>,
    /// Write the result here instead of standard output.
    #[arg(long = ARG_OUTPUT, short = 'o', value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Result format; inferred from the output extension when omitted.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Rank numbering for tied scores.
    #[arg(long = ARG_TIES, value_enum)]
    #[serde(default)]
    pub(crate) ties: Option<TiePolicy>,
    /// Reject inputs with more alternatives than this.
    #[arg(long = ARG_MAX_ALTERNATIVES, value_name = "count")]
    #[serde(default)]
    pub(crate) max_alternatives: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the CSV decision table.
    pub(crate) input: Utf8PathBuf,
    /// Parsed criterion weights.
    pub(crate) weights: Weights,
    /// Parsed criterion impacts.
    pub(crate) impacts: Impacts,
    /// Output file, or `None` for standard output.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Result serialisation.
    pub(crate) format: ExportFormat,
    /// Rank numbering for ties.
    pub(crate) policy: RankingPolicy,
    /// Largest accepted number of alternatives.
    pub(crate) max_alternatives: Option<usize>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.input, ARG_INPUT)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match topsis_io::fs::is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub(crate) const fn check_capacity(&self, count: usize) -> Result<(), CliError> {
        match self.max_alternatives {
            Some(max) if count > max => Err(CliError::TooManyAlternatives { count, max }),
            _ => Ok(()),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env: ENV_INPUT,
        })?;
        let weights = args
            .weights
            .ok_or(CliError::MissingArgument {
                field: ARG_WEIGHTS,
                env: ENV_WEIGHTS,
            })?
            .parse::<Weights>()
            .map_err(|source| CliError::InvalidList {
                field: ARG_WEIGHTS,
                source,
            })?;
        let impacts = args
            .impacts
            .ok_or(CliError::MissingArgument {
                field: ARG_IMPACTS,
                env: ENV_IMPACTS,
            })?
            .parse::<Impacts>()
            .map_err(|source| CliError::InvalidList {
                field: ARG_IMPACTS,
                source,
            })?;

        let format = args
            .format
            .map(ExportFormat::from)
            .or_else(|| args.output.as_deref().and_then(ExportFormat::from_path))
            .unwrap_or_default();
        let policy = args.ties.map(RankingPolicy::from).unwrap_or_default();

        Ok(Self {
            input,
            weights,
            impacts,
            output: args.output,
            format,
            policy,
            max_alternatives: args.max_alternatives,
        })
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    debug!("Resolved rank configuration: {config:?}");

    let table = read_decision_table(&config.input)?;
    config.check_capacity(table.len())?;
    let evaluation = evaluate_with(
        table.matrix(),
        &config.weights,
        &config.impacts,
        config.policy,
    )?;
    if let Some(best) = evaluation.ranked().next() {
        let label = table
            .matrix()
            .alternatives()
            .get(best.index)
            .map_or("", Alternative::label);
        info!("Best alternative is {label:?} with score {}", best.score);
    }

    let result = ResultTable::new(&table, &evaluation)?;
    match &config.output {
        Some(path) => export_result(path, &result, config.format)?,
        None => result.write(writer, config.format)?,
    }
    Ok(())
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
