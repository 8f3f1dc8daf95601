//! Focused unit tests covering recommend CLI configuration and output.

use super::helpers::{FixedDatasetProvider, SampleTable, render_table, write_utf8};
use super::*;
use crate::recommend::{
    CsvDatasetProvider, DEFAULT_FILE, RecommendCommandConfig, config_from_layers_for_test,
    run_recommend_with,
};
use crate::report::OutputFormat;
use camino::Utf8PathBuf;
use dramwise_core::test_support::{sample_whiskies, worked_example};
use dramwise_core::{DatasetError, NUM_RECOMMENDATIONS, RecommendError, Recommendations};
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;
use tempfile::TempDir;

fn args_liking(names: &[&str]) -> RecommendArgs {
    RecommendArgs {
        like: names.iter().map(|name| (*name).to_owned()).collect(),
        ..RecommendArgs::default()
    }
}

fn run_with_table(table: &SampleTable, mut args: RecommendArgs) -> Result<String, CliError> {
    args.file = Some(table.path().to_path_buf());
    let mut buffer = Vec::new();
    run_recommend_with(args, &CsvDatasetProvider, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("utf-8 output"))
}

#[rstest]
fn converting_without_likes_errors() {
    let err = RecommendCommandConfig::try_from(RecommendArgs::default())
        .expect_err("missing likes should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_LIKE);
            assert_eq!(env, ENV_LIKE);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_with_zero_count_errors() {
    let args = RecommendArgs {
        count: Some(0),
        ..args_liking(&["Ardbeg", "Lagavulin"])
    };
    let err = RecommendCommandConfig::try_from(args).expect_err("zero count should error");
    match err {
        CliError::ZeroCount { field } => assert_eq!(field, ARG_COUNT),
        other => panic!("expected ZeroCount, found {other:?}"),
    }
}

#[rstest]
fn converting_applies_defaults() {
    let config = RecommendCommandConfig::try_from(args_liking(&["Lagavulin", "Ardbeg", "Ardbeg"]))
        .expect("config should build");
    assert_eq!(config.file, Utf8PathBuf::from(DEFAULT_FILE));
    assert_eq!(config.count, NUM_RECOMMENDATIONS);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.key_column, "Distillery");
    assert_eq!(config.delimiter, b',');
    assert_eq!(config.liked.iter().collect::<Vec<_>>(), ["Ardbeg", "Lagavulin"]);
}

#[rstest]
#[case('\t', b'\t')]
#[case(';', b';')]
fn converting_accepts_ascii_delimiters(#[case] delimiter: char, #[case] expected: u8) {
    let args = RecommendArgs {
        delimiter: Some(delimiter),
        ..args_liking(&["Ardbeg", "Lagavulin"])
    };
    let config = RecommendCommandConfig::try_from(args).expect("config should build");
    assert_eq!(config.delimiter, expected);
}

#[rstest]
fn converting_rejects_wide_delimiters() {
    let args = RecommendArgs {
        delimiter: Some('§'),
        ..args_liking(&["Ardbeg", "Lagavulin"])
    };
    match RecommendCommandConfig::try_from(args).expect_err("non-ASCII delimiter") {
        CliError::InvalidDelimiter { field, value } => {
            assert_eq!(field, ARG_DELIMITER);
            assert_eq!(value, '§');
        }
        other => panic!("expected InvalidDelimiter, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_table() {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let config = RecommendCommandConfig {
        file: root.join("absent.txt"),
        ..RecommendCommandConfig::try_from(args_liking(&["A", "B"])).expect("config")
    };
    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_FILE),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let table = SampleTable::new();
    let config = RecommendCommandConfig {
        file: table.root().to_path_buf(),
        ..RecommendCommandConfig::try_from(args_liking(&["A", "B"])).expect("config")
    };
    match config.validate_sources().expect_err("expected failure") {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_FILE),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "count": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "file": "from-file.txt",
            "count": 3,
            "key_column": "Name",
        }),
        None,
    );
    composer.push_environment(json!({ "count": 5 }));
    composer.push_cli(json!({
        "like": ["Ardbeg", "Lagavulin"],
        "format": "json",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.file, Utf8PathBuf::from("from-file.txt"));
    assert_eq!(config.count, 5);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.key_column, "Name");
    assert_eq!(config.liked.len(), 2);
}

#[rstest]
fn text_report_matches_classic_layout() {
    let table = SampleTable::new();
    let args = RecommendArgs {
        file: Some(table.path().to_path_buf()),
        ..args_liking(&["A", "B"])
    };
    let provider = FixedDatasetProvider {
        dataset: worked_example(),
    };
    let mut buffer = Vec::new();
    run_recommend_with(args, &provider, &mut buffer).expect("recommend succeeds");

    assert_eq!(
        String::from_utf8(buffer).expect("utf-8 output"),
        "We have detected your flavor preferences as:\n\
         - X (weight 0.00)\n\
         - Y (weight 0.00)\n\
         \n\
         Our recommendations: \n\
         - C (weight 0.00)\n\
         - D (weight 0.00)\n"
    );
}

#[rstest]
fn table_on_disk_drives_recommendations() {
    let table = SampleTable::new();
    let args = RecommendArgs {
        count: Some(3),
        ..args_liking(&["Ardbeg", "Lagavulin"])
    };
    let stdout = run_with_table(&table, args).expect("recommend succeeds");

    let (_, recommendations) = stdout
        .split_once("Our recommendations: \n")
        .expect("recommendation heading");
    assert_eq!(
        recommendations,
        "- Laphroig (weight 8.00)\n- Caol Ila (weight 6.00)\n- Clynelish (weight 6.00)\n"
    );
    assert!(stdout.starts_with(
        "We have detected your flavor preferences as:\n- Body (weight 1.00)\n"
    ));
}

#[rstest]
fn json_report_round_trips() {
    let table = SampleTable::new();
    let args = RecommendArgs {
        format: Some(OutputFormat::Json),
        ..args_liking(&["Ardbeg", "Lagavulin"])
    };
    let stdout = run_with_table(&table, args).expect("recommend succeeds");

    let output: Recommendations = serde_json::from_str(&stdout).expect("JSON recommendations");
    assert_eq!(output.preferences.len(), 12);
    assert_eq!(output.recommendations.len(), NUM_RECOMMENDATIONS);
    assert_eq!(
        output.recommendations.first().map(|r| r.name.as_str()),
        Some("Laphroig")
    );
}

#[rstest]
fn unknown_likes_surface_every_name() {
    let table = SampleTable::new();
    let err = run_with_table(&table, args_liking(&["Ardbeg", "Nowhere", "Elsewhere"]))
        .expect_err("unknown likes should fail");
    match err {
        CliError::Recommend(RecommendError::UnknownDistillery { names }) => {
            assert_eq!(names, ["Elsewhere", "Nowhere"]);
        }
        other => panic!("expected UnknownDistillery, found {other:?}"),
    }
}

#[rstest]
fn malformed_table_reports_load_error() {
    let table = SampleTable::new();
    write_utf8(table.path(), b"Distillery,Body\nArdbeg,4\n");
    let err = run_with_table(&table, args_liking(&["Ardbeg", "Lagavulin"]))
        .expect_err("missing flavour columns should fail");
    match err {
        CliError::Load { path, .. } => assert_eq!(path, table.path()),
        other => panic!("expected Load, found {other:?}"),
    }
}

#[rstest]
fn non_numeric_intensity_is_malformed_data() {
    let table = SampleTable::new();
    let contents = render_table(&sample_whiskies()).replacen(",Ardbeg,4,", ",Ardbeg,heavy,", 1);
    write_utf8(table.path(), contents.as_bytes());
    let err = run_with_table(&table, args_liking(&["Ardbeg", "Lagavulin"]))
        .expect_err("non-numeric cell should fail");
    match err {
        CliError::Recommend(RecommendError::MalformedData(DatasetError::InvalidIntensity {
            distillery,
            raw,
            ..
        })) => {
            assert_eq!(distillery, "Ardbeg");
            assert_eq!(raw, "heavy");
        }
        other => panic!("expected MalformedData, found {other:?}"),
    }
}

#[rstest]
fn tab_separated_table_loads_with_delimiter() {
    let table = SampleTable::new();
    let contents = render_table(&sample_whiskies()).replace(',', "\t");
    write_utf8(table.path(), contents.as_bytes());
    let args = RecommendArgs {
        count: Some(1),
        delimiter: Some('\t'),
        ..args_liking(&["Ardbeg", "Lagavulin"])
    };
    let stdout = run_with_table(&table, args).expect("recommend succeeds");

    assert!(stdout.ends_with("Our recommendations: \n- Laphroig (weight 8.00)\n"));
}
