//! Plan command implementation for the tour CLI.

use std::io::{BufRead, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tour_core::{AttractivenessModel, Landmark, SolveRequest, Solver, TourGraph};
use tour_data::{DatasetPaths, TourDataset};
use tour_solver_dp::HeldKarpSolver;

use crate::present::{OutputFormat, write_tour};
use crate::{
    ARG_PLAN_DATA_DIR, ARG_PLAN_EXPECTED_LANDMARKS, ARG_PLAN_FORMAT, ARG_PLAN_GRAPH,
    ARG_PLAN_INTEREST, ARG_PLAN_LOAD, ARG_PLAN_START, CliError,
};

/// Question asked when no expected landmark count was configured.
pub(crate) const LANDMARK_COUNT_PROMPT: &str =
    "Please enter the total number of landmarks (including Hotel): ";

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Read the personal interest, visitor load and landmark map \
                 tables, confirm the landmark count, and print the closed \
                 tour with the highest total attractiveness. Paths can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Plan the optimal landmark tour"
)]
#[ortho_config(prefix = "TOUR")]
pub(crate) struct PlanArgs {
    /// Directory containing the default table filenames.
    #[arg(long = ARG_PLAN_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the landmark map (`landmark_map_data.txt`).
    #[arg(long = ARG_PLAN_GRAPH, value_name = "path")]
    #[serde(default)]
    pub(crate) graph: Option<Utf8PathBuf>,
    /// Override the path to the personal interest table (`personal_interest.txt`).
    #[arg(long = ARG_PLAN_INTEREST, value_name = "path")]
    #[serde(default)]
    pub(crate) interest: Option<Utf8PathBuf>,
    /// Override the path to the visitor load table (`visitor_load.txt`).
    #[arg(long = ARG_PLAN_LOAD, value_name = "path")]
    #[serde(default)]
    pub(crate) load: Option<Utf8PathBuf>,
    /// Landmark the tour starts from and returns to (default "Hotel").
    #[arg(long = ARG_PLAN_START, value_name = "landmark")]
    #[serde(default)]
    pub(crate) start: Option<String>,
    /// Number of landmarks the map must hold, Hotel included. Prompted for
    /// on stdin when absent.
    #[arg(long = ARG_PLAN_EXPECTED_LANDMARKS, value_name = "count")]
    #[serde(default)]
    pub(crate) expected_landmarks: Option<usize>,
    /// Output format.
    #[arg(long = ARG_PLAN_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Locations of the three input tables.
    pub(crate) paths: DatasetPaths,
    /// Start and end of the tour.
    pub(crate) start: Landmark,
    /// Landmark count to confirm before solving.
    pub(crate) expected_landmarks: Option<usize>,
    /// Presentation of the solved tour.
    pub(crate) format: OutputFormat,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.paths.interest, ARG_PLAN_INTEREST)?;
        Self::require_existing(&self.paths.load, ARG_PLAN_LOAD)?;
        Self::require_existing(&self.paths.graph, ARG_PLAN_GRAPH)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match tour_data::fs::is_regular_file(path) {
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

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let data_dir = args.data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let defaults = DatasetPaths::in_dir(&data_dir);
        let paths = DatasetPaths {
            graph: args.graph.unwrap_or(defaults.graph),
            interest: args.interest.unwrap_or(defaults.interest),
            load: args.load.unwrap_or(defaults.load),
        };
        let start = args.start.map_or_else(Landmark::hotel, Landmark::new);

        Ok(Self {
            paths,
            start,
            expected_landmarks: args.expected_landmarks,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut input, &mut stdout)
}

/// Run `plan` against explicit input and output streams.
///
/// `input` is only read when the expected landmark count must be prompted
/// for; the prompt and the tour are both written to `writer`.
pub(super) fn run_plan_with(
    args: PlanArgs,
    input: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    execute_plan(&config, input, writer)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    debug!("resolved plan configuration: {config:?}");
    Ok(config)
}

fn execute_plan(
    config: &PlanConfig,
    input: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let dataset = TourDataset::load(&config.paths)?;
    let model = AttractivenessModel::new(dataset.interest, dataset.load)?;
    let graph = TourGraph::build(&dataset.edges, &model)?;

    let expected = match config.expected_landmarks {
        Some(count) => count,
        None => prompt_landmark_count(input, writer)?,
    };
    if expected != graph.len() {
        return Err(CliError::LandmarkCountMismatch {
            expected,
            found: graph.len(),
        });
    }
    info!("three input files are read; planning a tour over {expected} landmarks");

    let solver = HeldKarpSolver::new(graph);
    let response = solver
        .solve(&SolveRequest::from_start(config.start.clone()))
        .map_err(|source| CliError::Solve { source })?;
    debug!(
        "evaluated {} states in {:?}",
        response.diagnostics.states_evaluated, response.diagnostics.solve_time
    );
    write_tour(writer, config.format, &response.tour)
}

fn prompt_landmark_count(
    input: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<usize, CliError> {
    writer
        .write_all(LANDMARK_COUNT_PROMPT.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)?;
    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(CliError::ReadLandmarkCount)?;
    parse_landmark_count(&answer)
}

pub(crate) fn parse_landmark_count(answer: &str) -> Result<usize, CliError> {
    let trimmed = answer.trim();
    trimmed
        .parse()
        .map_err(|_| CliError::InvalidLandmarkCount {
            input: trimmed.to_owned(),
        })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
