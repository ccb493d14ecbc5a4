//! Plan command implementation for the roadlog CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roadlog_core::{
    DEFAULT_START_HOUR, DailyLog, Location, TripPlan, TripRequest, UNKNOWN_LOCATION_LABEL,
    build_trip_logs, trip_start_anchor,
};
use serde::{Deserialize, Serialize};

use crate::fs::{create_utf8_file, file_is_file, open_utf8_file};
use crate::report::TripReport;
use crate::{
    ARG_PLAN_FORMAT, ARG_PLAN_OUTPUT, ARG_PLAN_REQUEST, ARG_PLAN_START_DATE, ARG_PLAN_START_HOUR,
    CliError, ENV_PLAN_REQUEST,
};

/// How the planned trip is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON with the plan and its daily logs.
    #[default]
    Json,
    /// Human-readable trip report.
    Text,
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Plan a trip from a JSON-encoded request holding the current, \
                 pickup and dropoff locations and the cycle hours already used. \
                 The itinerary and one duty log per day are written as JSON or \
                 as a plain-text report.",
    about = "Plan an hours-of-service compliant trip"
)]
#[ortho_config(prefix = "ROADLOG")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a trip request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Calendar date the trip starts on (defaults to today).
    #[arg(long = ARG_PLAN_START_DATE, value_name = "YYYY-MM-DD")]
    #[serde(default)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Hour of day the trip starts at (defaults to 1).
    #[arg(long = ARG_PLAN_START_HOUR, value_name = "hour")]
    #[serde(default)]
    pub(crate) start_hour: Option<u32>,
    /// Output format.
    #[arg(long = ARG_PLAN_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Write output to this file instead of stdout.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
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
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Wall-clock instant of elapsed hour zero.
    pub(crate) anchor: NaiveDateTime,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Output file, or stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    /// Resolve `args`, starting on `today` unless a date was given.
    pub(crate) fn resolve(args: PlanArgs, today: NaiveDate) -> Result<Self, CliError> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let hour = args.start_hour.unwrap_or(DEFAULT_START_HOUR);
        let date = args.start_date.unwrap_or(today);
        let anchor = trip_start_anchor(date, hour).ok_or(CliError::InvalidStartHour { hour })?;
        Ok(Self {
            request_path,
            anchor,
            format: args.format.unwrap_or_default(),
            output: args.output,
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::MissingSourceFile {
                field: ARG_PLAN_REQUEST,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_PLAN_REQUEST,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_PLAN_REQUEST,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    /// The local date is read here, at the command boundary, and never by the
    /// planning engine.
    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        Self::resolve(args, Local::now().date_naive())
    }
}

/// A planned trip with its daily logs, as written by `--format json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlannedTrip {
    /// The itinerary.
    pub(crate) plan: TripPlan,
    /// One duty log per day of the trip.
    pub(crate) logs: Vec<DailyLog>,
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

/// Run `plan`, writing to `stdout` unless the configuration names a file.
pub(crate) fn run_plan_with(args: PlanArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let request = load_trip_request(&config.request_path)?;
    let trip = execute_plan(&config, &request)?;
    match &config.output {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_trip(&mut file, config.format, &request, &trip)
        }
        None => write_trip(stdout, config.format, &request, &trip),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_plan(
    config: &PlanConfig,
    request: &TripRequest,
) -> Result<PlannedTrip, CliError> {
    let path = &config.request_path;
    request
        .validate()
        .map_err(|source| CliError::InvalidTripRequest {
            path: path.clone(),
            source,
        })?;
    let plan = request.plan().map_err(|source| CliError::Plan {
        path: path.clone(),
        source,
    })?;
    let logs = build_trip_logs(&plan, config.anchor).map_err(CliError::BuildLogs)?;
    Ok(PlannedTrip { plan, logs })
}

/// Loads a JSON-encoded [`TripRequest`] from disk.
pub(crate) fn load_trip_request(path: &Utf8Path) -> Result<TripRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenTripRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseTripRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_trip(
    writer: &mut dyn Write,
    format: OutputFormat,
    request: &TripRequest,
    trip: &PlannedTrip,
) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(trip).map_err(CliError::SerialiseOutput)? + "\n"
        }
        OutputFormat::Text => render_report(request, trip),
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}

fn label(location: Option<&Location>) -> &str {
    location.map_or(UNKNOWN_LOCATION_LABEL, Location::label)
}

fn render_report(request: &TripRequest, trip: &PlannedTrip) -> String {
    TripReport {
        from: label(request.pickup_location.as_ref()),
        to: label(request.dropoff_location.as_ref()),
        plan: &trip.plan,
        logs: &trip.logs,
    }
    .to_string()
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
    today: NaiveDate,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::resolve(merged, today)
}
