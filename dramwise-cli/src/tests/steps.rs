//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::SampleTable;
use super::*;
use crate::recommend::{CsvDatasetProvider, run_recommend_with};
use dramwise_core::{RecommendError, Recommendations};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct RecommendWorld {
    table: SampleTable,
    table_present: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            table: SampleTable::new(),
            table_present: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args<I: IntoIterator<Item = String>>(&self, args: I) {
        self.cli_args.borrow_mut().extend(args);
    }

    fn build_command_line(&self) -> Vec<String> {
        let file = if *self.table_present.borrow() {
            self.table.path().to_path_buf()
        } else {
            self.table.root().join("missing.txt")
        };
        let mut argv = vec![
            "dramwise".to_owned(),
            "recommend".to_owned(),
            format!("--{ARG_FILE}"),
            file.into_string(),
        ];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn assert_success(&self) {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
    }

    fn assert_error(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

fn like_flags(names: &[String]) -> Vec<String> {
    names
        .iter()
        .flat_map(|name| [format!("--{ARG_LIKE}"), name.trim_matches('"').to_owned()])
        .collect()
}

#[given("a flavour table exists on disk")]
fn table_exists(#[from(world)] world: &RecommendWorld) {
    *world.table_present.borrow_mut() = true;
}

#[given("the flavour table is missing")]
fn table_missing(#[from(world)] world: &RecommendWorld) {
    *world.table_present.borrow_mut() = false;
}

#[given("I like {first} and {second}")]
fn like_two(#[from(world)] world: &RecommendWorld, first: String, second: String) {
    world.push_args(like_flags(&[first, second]));
}

#[given("I like only {name}")]
fn like_one(#[from(world)] world: &RecommendWorld, name: String) {
    world.push_args(like_flags(&[name]));
}

#[given("I request JSON output")]
fn request_json(#[from(world)] world: &RecommendWorld) {
    world.push_args([format!("--{ARG_FORMAT}"), "json".to_owned()]);
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &CsvDatasetProvider, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command completes successfully")]
fn command_succeeds(#[from(world)] world: &RecommendWorld) {
    world.assert_success();
}

#[then("the first recommendation printed is {name}")]
fn first_recommendation(#[from(world)] world: &RecommendWorld, name: String) {
    let stdout = world.stdout();
    let (_, recommendations) = stdout
        .split_once("Our recommendations: \n")
        .expect("recommendation heading");
    let expected = format!("- {} (weight", name.trim_matches('"'));
    assert!(
        recommendations.starts_with(&expected),
        "unexpected recommendations: {recommendations}"
    );
}

#[then("the command succeeds and prints JSON with {count} recommendations")]
fn prints_json(#[from(world)] world: &RecommendWorld, count: usize) {
    world.assert_success();
    let output: Recommendations =
        serde_json::from_str(&world.stdout()).expect("output should be JSON recommendations");
    assert_eq!(output.recommendations.len(), count);
}

#[then("the command fails because too few distilleries are liked")]
fn fails_too_few(#[from(world)] world: &RecommendWorld) {
    world.assert_error(|error| match error {
        CliError::Recommend(RecommendError::InsufficientLikes { found, .. }) => {
            assert_eq!(*found, 1);
        }
        other => panic!("expected InsufficientLikes, found {other:?}"),
    });
}

#[then("the command fails because the table does not exist")]
fn fails_missing_table(#[from(world)] world: &RecommendWorld) {
    world.assert_error(|error| match error {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_FILE),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    });
}

#[then("the command fails because no likes were given")]
fn fails_without_likes(#[from(world)] world: &RecommendWorld) {
    world.assert_error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_LIKE),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_happy_path, "recommending from a flavour table");
register_recommend_scenario!(recommend_json, "requesting JSON output");
register_recommend_scenario!(recommend_single_like, "rejecting a single like");
register_recommend_scenario!(recommend_missing_table, "rejecting a missing flavour table");
register_recommend_scenario!(recommend_without_likes, "rejecting a run without likes");
