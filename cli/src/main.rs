//! HealthDesk command-line front end.
//!
//! Records daily health metrics, shows today-vs-yesterday comparisons and
//! same-day summaries, and searches the (mock) hospital directory and health
//! records.
//!
//! Usage:
//!   healthdesk set steps 8000
//!   healthdesk set mentalHealth Thriving --date 2024-06-01
//!   healthdesk compare steps
//!   healthdesk summary --json
//!   healthdesk hospitals --search general --category General
//!   healthdesk wait 10 14 15
//!   healthdesk ask "how do I bring a fever down?"
//!   healthdesk diagnose "runny nose and sore throat"

mod render;

use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use healthdesk_config::{HealthDeskConfig, StorageBackend};
use healthdesk_contracts::{
    date::DateKey,
    error::HealthDeskResult,
    metrics::MetricField,
};
use healthdesk_core::{traits::KeyValueStore, HealthMetricsStore};
use healthdesk_directory::{
    assistant_reply, diagnose, estimate_wait_minutes, format_wait, mock_health_records,
    mock_hospitals, search_records, HospitalCategory, HospitalFilter,
};
use healthdesk_storage::{FileKeyValueStore, InMemoryKeyValueStore};

/// Configuration file picked up from the working directory when `--config`
/// is not given.
const LOCAL_CONFIG: &str = "healthdesk.toml";

// ── CLI definition ────────────────────────────────────────────────────────────

/// HealthDesk: personal health tracking and hospital directory.
#[derive(Parser)]
#[command(
    name = "healthdesk",
    about = "Track daily health metrics and search the hospital directory",
    long_about = "Track daily health metrics (steps, calories, water, sleep, heart rate,\n\
                  mental health), compare today with yesterday, and search the hospital\n\
                  directory and your health records."
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the file storage backend (overrides the configuration).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep history in memory only; nothing is written to disk.
    #[arg(long, global = true)]
    memory: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the metrics recorded for a date (defaults apply to unrecorded days).
    Show {
        /// Date as YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        date: Option<DateKey>,
    },
    /// Set one metric for a date and persist the history.
    Set {
        /// steps | calories | water | sleep | heartRate | mentalHealth
        field: MetricField,
        /// New value. Mental health takes Stressed, Calm, or Thriving.
        value: String,
        #[arg(long)]
        date: Option<DateKey>,
    },
    /// Compare one metric between the selected date and the day before.
    Compare {
        field: MetricField,
        #[arg(long)]
        date: Option<DateKey>,
    },
    /// Every metric for one date, mental health as its 1-3 score.
    Summary {
        #[arg(long)]
        date: Option<DateKey>,
    },
    /// List every recorded date.
    History,
    /// Search the hospital directory.
    Hospitals {
        /// Matches hospital name or address, case-insensitive.
        #[arg(long, default_value = "")]
        search: String,
        /// One of: General, Teaching, Acute Care, Long-term Care, Community,
        /// Research, Trauma Care.
        #[arg(long)]
        category: Option<HospitalCategory>,
    },
    /// Search your health records by diagnosis, doctor, hospital, or symptom.
    Records {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Estimate the wait for a queue ticket.
    Wait {
        /// Ticket number currently being served.
        current: u32,
        /// Your ticket number.
        yours: u32,
        /// Average minutes spent per patient.
        avg_minutes: u32,
    },
    /// Ask the (demo) health assistant a question.
    Ask {
        /// Free-text question.
        message: String,
    },
    /// Run the (demo) symptom check. Not a medical diagnosis.
    Diagnose {
        /// Free-text description of your symptoms.
        symptoms: String,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("healthdesk: {}", e);
            std::process::exit(2);
        }
    };

    // RUST_LOG wins over the configured filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let today = DateKey::new(Local::now().date_naive());
    if let Err(e) = run(cli, &config, today) {
        eprintln!("healthdesk: {}", e);
        std::process::exit(1);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn resolve_config(cli: &Cli) -> HealthDeskResult<HealthDeskConfig> {
    let mut config = match &cli.config {
        Some(path) => HealthDeskConfig::from_file(path)?,
        None if Path::new(LOCAL_CONFIG).is_file() => {
            HealthDeskConfig::from_file(Path::new(LOCAL_CONFIG))?
        }
        None => HealthDeskConfig::default(),
    };

    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.clone();
    }
    if cli.memory {
        config.storage.backend = StorageBackend::Memory;
    }
    Ok(config)
}

fn open_store(config: &HealthDeskConfig, today: DateKey) -> HealthDeskResult<HealthMetricsStore> {
    let backend: Box<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => Box::new(FileKeyValueStore::open(&config.storage.data_dir)?),
        StorageBackend::Memory => Box::new(InMemoryKeyValueStore::new()),
    };

    debug!(
        backend = ?config.storage.backend,
        data_dir = %config.storage.data_dir.display(),
        key = %config.storage.key,
        "opening metrics store"
    );
    Ok(HealthMetricsStore::load(backend, config.storage.key.clone(), today))
}

// ── Command dispatch ──────────────────────────────────────────────────────────

fn run(cli: Cli, config: &HealthDeskConfig, today: DateKey) -> HealthDeskResult<()> {
    let json = cli.json;

    match cli.command {
        Command::Show { date } => {
            let store = open_store(config, today)?;
            let date = date.unwrap_or(today);
            render::record(date, &store.record(date), json)
        }
        Command::Set { field, value, date } => {
            let mut store = open_store(config, today)?;
            let date = date.unwrap_or(today);
            store.select_date(date);
            let updated = store.set_field(date, field, &value)?;
            render::record(date, &updated, json)
        }
        Command::Compare { field, date } => {
            let mut store = open_store(config, today)?;
            store.select_date(date.unwrap_or(today));
            let series = store.comparison_series(field);
            render::series(&format!("{}: yesterday vs today", field.label()), &series, json)
        }
        Command::Summary { date } => {
            let store = open_store(config, today)?;
            let date = date.unwrap_or(today);
            render::series(&format!("Summary for {}", date), &store.summary(date), json)
        }
        Command::History => {
            let store = open_store(config, today)?;
            render::history(store.history(), json)
        }
        Command::Hospitals { search, category } => {
            let hospitals = mock_hospitals();
            let matched = HospitalFilter::new(search, category).apply(&hospitals);
            render::hospitals(&matched, json)
        }
        Command::Records { search } => {
            let records = mock_health_records();
            render::records(&search_records(&records, &search), json)
        }
        Command::Wait {
            current,
            yours,
            avg_minutes,
        } => {
            let minutes = estimate_wait_minutes(current, yours, avg_minutes);
            render::wait(minutes, &format_wait(minutes), json)
        }
        Command::Ask { message } => render::reply(&message, &assistant_reply(&message), json),
        Command::Diagnose { symptoms } => render::diagnosis(&diagnose(&symptoms)?, json),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use clap::Parser;

    use healthdesk_config::{HealthDeskConfig, StorageBackend};
    use healthdesk_contracts::{date::DateKey, error::HealthDeskError, metrics::MetricField};
    use healthdesk_directory::HospitalCategory;

    use super::{open_store, run, Cli, Command};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("healthdesk").chain(args.iter().copied())).unwrap()
    }

    fn date(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    /// File-backed config rooted in a fresh temp dir.
    fn file_config() -> (tempfile::TempDir, HealthDeskConfig) {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = HealthDeskConfig::default();
        config.storage.backend = StorageBackend::File;
        config.storage.data_dir = tmp.path().join("data");
        (tmp, config)
    }

    // ── Argument parsing ──────────────────────────────────────────────────────

    #[test]
    fn test_parse_set_with_date() {
        let cli = Cli::try_parse_from([
            "healthdesk", "set", "heartRate", "72", "--date", "2024-06-01",
        ])
        .unwrap();
        match cli.command {
            Command::Set { field, value, date } => {
                assert_eq!(field, MetricField::HeartRate);
                assert_eq!(value, "72");
                assert_eq!(date.unwrap().to_string(), "2024-06-01");
            }
            _ => panic!("expected Set"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_metric_and_bad_date() {
        assert!(Cli::try_parse_from(["healthdesk", "compare", "bloodSugar"]).is_err());
        assert!(Cli::try_parse_from(["healthdesk", "show", "--date", "2024-02-30"]).is_err());
    }

    #[test]
    fn test_parse_hospitals_category_label() {
        let cli = Cli::try_parse_from([
            "healthdesk", "--memory", "hospitals", "--category", "Acute Care",
        ])
        .unwrap();
        assert!(cli.memory);
        match cli.command {
            Command::Hospitals { search, category } => {
                assert_eq!(search, "");
                assert_eq!(category, Some(HospitalCategory::AcuteCare));
            }
            _ => panic!("expected Hospitals"),
        }
    }

    #[test]
    fn test_parse_ask_and_diagnose_take_free_text() {
        match cli(&["ask", "is chest pain an emergency?"]).command {
            Command::Ask { message } => assert_eq!(message, "is chest pain an emergency?"),
            _ => panic!("expected Ask"),
        }
        match cli(&["--json", "diagnose", "sore throat"]).command {
            Command::Diagnose { symptoms } => assert_eq!(symptoms, "sore throat"),
            _ => panic!("expected Diagnose"),
        }
    }

    // ── Command dispatch ──────────────────────────────────────────────────────

    /// A value written by `set` is what a later `compare` reads back.
    #[test]
    fn test_run_set_then_compare_uses_persisted_history() {
        let (_tmp, config) = file_config();
        let today = date("2024-06-02");

        run(cli(&["set", "steps", "8000", "--date", "2024-06-01"]), &config, today).unwrap();
        run(cli(&["compare", "steps", "--date", "2024-06-02"]), &config, today).unwrap();

        let mut store = open_store(&config, today).unwrap();
        assert_eq!(store.record(date("2024-06-01")).steps, 8000);
        assert_eq!(store.history().len(), 1, "compare must not store anything");

        store.select_date(today);
        let series = store.comparison_series(MetricField::Steps);
        assert_eq!(series[0].label, "Yesterday");
        assert_eq!(series[0].value, 8000.0);
        assert_eq!(series[1].label, "Today");
        assert_eq!(series[1].value, 500.0);
    }

    #[test]
    fn test_run_set_rejects_bad_value_without_writing() {
        let (_tmp, config) = file_config();
        let today = date("2024-06-02");

        let err = run(cli(&["set", "steps", "lots"]), &config, today).unwrap_err();
        assert!(matches!(err, HealthDeskError::InvalidFieldValue { .. }));
        assert!(open_store(&config, today).unwrap().history().is_empty());
    }

    #[test]
    fn test_run_memory_backend_and_directory_commands() {
        let mut config = HealthDeskConfig::default();
        config.storage.backend = StorageBackend::Memory;
        let today = date("2024-06-02");

        run(cli(&["set", "mentalHealth", "Thriving"]), &config, today).unwrap();
        run(cli(&["hospitals", "--search", "general"]), &config, today).unwrap();
        run(cli(&["wait", "10", "14", "15"]), &config, today).unwrap();
        run(cli(&["ask", "fever"]), &config, today).unwrap();
        run(cli(&["diagnose", "cough"]), &config, today).unwrap();
    }

    #[test]
    fn test_run_diagnose_rejects_blank_symptoms() {
        let config = HealthDeskConfig::default();
        let err = run(cli(&["diagnose", "  "]), &config, date("2024-06-02")).unwrap_err();
        assert!(matches!(err, HealthDeskError::EmptyInput { .. }));
    }
}
