//! Recommend command implementation for the dramwise CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use dramwise_core::{
    AttributeSet, Dataset, LikedSet, NUM_RECOMMENDATIONS, RecommendConfig, RecommendError,
};
use dramwise_data::{CsvDatasetLoader, DEFAULT_KEY_COLUMN, LoadError};
use dramwise_scorer::Recommender;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::report::{OutputFormat, write_report};
use crate::{
    ARG_COUNT, ARG_DELIMITER, ARG_FILE, ARG_FORMAT, ARG_KEY_COLUMN, ARG_LIKE, CliError, ENV_LIKE,
};

/// Flavour table read when no path is configured.
pub(crate) const DEFAULT_FILE: &str = "whiskies.txt";

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Infer flavour preferences from the distilleries you like and \
                 rank the remaining distilleries by how well they match. \
                 Options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Recommend distilleries similar to the ones you like"
)]
#[ortho_config(prefix = "DRAMWISE")]
pub(crate) struct RecommendArgs {
    /// Path to the flavour table (defaults to `whiskies.txt`).
    #[arg(long = ARG_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) file: Option<Utf8PathBuf>,
    /// A distillery you like; repeat for each one (at least two).
    #[arg(long = ARG_LIKE, value_name = "distillery")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) like: Vec<String>,
    /// Number of recommendations to print (defaults to 8).
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Column holding distillery names (defaults to `Distillery`).
    #[arg(long = ARG_KEY_COLUMN, value_name = "column")]
    #[serde(default)]
    pub(crate) key_column: Option<String>,
    /// Field delimiter of the flavour table (defaults to `,`).
    #[arg(long = ARG_DELIMITER, value_name = "char")]
    #[serde(default)]
    pub(crate) delimiter: Option<char>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendCommandConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendCommandConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendCommandConfig {
    /// Path to the flavour table.
    pub(crate) file: Utf8PathBuf,
    /// Distilleries the user likes.
    pub(crate) liked: LikedSet,
    /// Maximum number of recommendations.
    pub(crate) count: usize,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Column holding distillery names.
    pub(crate) key_column: String,
    /// Single-byte field delimiter.
    pub(crate) delimiter: u8,
}

impl RecommendCommandConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.file, ARG_FILE)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match dramwise_data::fs::file_is_file(path) {
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
}

impl TryFrom<RecommendArgs> for RecommendCommandConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        if args.like.is_empty() {
            return Err(CliError::MissingArgument {
                field: ARG_LIKE,
                env: ENV_LIKE,
            });
        }
        let delimiter = match args.delimiter {
            None => b',',
            Some(ch) => u8::try_from(ch)
                .ok()
                .filter(u8::is_ascii)
                .ok_or(CliError::InvalidDelimiter {
                    field: ARG_DELIMITER,
                    value: ch,
                })?,
        };
        let count = args.count.unwrap_or(NUM_RECOMMENDATIONS);
        if count == 0 {
            return Err(CliError::ZeroCount { field: ARG_COUNT });
        }
        Ok(Self {
            file: args.file.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_FILE)),
            liked: args.like.into_iter().collect(),
            count,
            format: args.format.unwrap_or_default(),
            key_column: args
                .key_column
                .unwrap_or_else(|| DEFAULT_KEY_COLUMN.to_owned()),
            delimiter,
        })
    }
}

/// Supplies the flavour table for a recommend invocation.
pub(crate) trait DatasetProvider {
    fn dataset(&self, config: &RecommendCommandConfig) -> Result<Dataset, CliError>;
}

/// Reads the configured table from disk over the twelve standard flavours.
///
/// Rows that fail dataset validation surface as
/// [`RecommendError::MalformedData`]; file and header failures stay
/// [`CliError::Load`].
pub(crate) struct CsvDatasetProvider;

impl DatasetProvider for CsvDatasetProvider {
    fn dataset(&self, config: &RecommendCommandConfig) -> Result<Dataset, CliError> {
        CsvDatasetLoader::default()
            .with_key_column(config.key_column.as_str())
            .with_delimiter(config.delimiter)
            .load(&config.file, &AttributeSet::default())
            .map_err(|source| match source {
                LoadError::Dataset(err) => RecommendError::MalformedData(err).into(),
                source => CliError::Load {
                    path: config.file.clone(),
                    source,
                },
            })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &CsvDatasetProvider, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    provider: &dyn DatasetProvider,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let dataset = provider.dataset(&config)?;
    debug!(
        "recommending from {} distilleries for {} likes",
        dataset.len(),
        config.liked.len()
    );
    let output = Recommender::new(RecommendConfig::with_limit(config.count))
        .recommend(&dataset, &config.liked)?;
    write_report(writer, config.format, &output)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendCommandConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendCommandConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendCommandConfig::try_from(merged)
}
