//! Integration tests with real engines
//!
//! Tests the full flow: NDJSON directory → engine → Parquet tree

use ndjson2parquet::batch::BatchConverter;
use ndjson2parquet::config::ConvertConfig;
use ndjson2parquet::convert::{build_converter, ArrowConverter, DuckDbConverter};
use ndjson2parquet::{EngineKind, Error, ParquetCompression};
use parquet::file::reader::{FileReader, SerializedFileReader};
use pretty_assertions::assert_eq;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use test_case::test_case;

struct Workspace {
    _dir: TempDir,
    ndjson: PathBuf,
    parquet: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let ndjson = dir.path().join("analytics_work/ndjson");
        let parquet = dir.path().join("analytics_store/parquet");
        fs::create_dir_all(&ndjson).unwrap();
        Self {
            _dir: dir,
            ndjson,
            parquet,
        }
    }

    fn add(&self, name: &str, content: &str) {
        fs::write(self.ndjson.join(name), content).unwrap();
    }

    fn config(&self, run_id: &str) -> ConvertConfig {
        ConvertConfig::new(run_id)
            .with_input_dir(&self.ndjson)
            .with_output_dir(&self.parquet)
    }

    fn rows(&self, table: &str, run_id: &str) -> i64 {
        let path = self.parquet.join(table).join(format!("{run_id}.parquet"));
        let reader = SerializedFileReader::new(File::open(path).unwrap()).unwrap();
        reader.metadata().file_metadata().num_rows()
    }

    fn tree(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.parquet.exists() {
            collect(&self.parquet, &self.parquet, &mut out);
        }
        out.sort();
        out
    }
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, out);
        } else {
            out.push(path.strip_prefix(root).unwrap().to_string_lossy().into_owned());
        }
    }
}

const USERS: &str = r#"{"user_id": 1, "email": "alice@example.com", "plan": "pro"}
{"user_id": 2, "email": "bob@example.com", "plan": null}
"#;

const EVENTS: &str = r#"{"event": "login", "user_id": 1, "ts": "2024-01-01T10:00:00Z"}
{"event": "click", "user_id": 1, "ts": "2024-01-01T10:00:05Z", "target": "buy"}
{"event": "logout", "user_id": 2, "ts": "2024-01-01T11:00:00Z"}
"#;

// ============================================================================
// Conversion Scenarios
// ============================================================================

#[test_case(EngineKind::Duckdb ; "duckdb")]
#[test_case(EngineKind::Arrow ; "arrow")]
fn test_users_and_events(engine: EngineKind) {
    let ws = Workspace::new();
    ws.add("users.ndjson", USERS);
    ws.add("events.ndjson", EVENTS);

    let converter = build_converter(engine, ParquetCompression::Snappy).unwrap();
    let summary = BatchConverter::new(ws.config("20240101"), converter)
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(summary.file_count(), 2);
    assert_eq!(summary.engine, engine.to_string());
    assert_eq!(
        ws.tree(),
        vec!["events/20240101.parquet", "users/20240101.parquet"]
    );
    assert_eq!(ws.rows("users", "20240101"), 2);
    assert_eq!(ws.rows("events", "20240101"), 3);
}

#[test]
fn test_empty_input_directory() {
    let ws = Workspace::new();

    let summary = BatchConverter::new(
        ws.config("20240101"),
        DuckDbConverter::new(ParquetCompression::Snappy).unwrap(),
    )
    .unwrap()
    .run()
    .unwrap();

    assert_eq!(summary.file_count(), 0);
    assert!(!ws.parquet.exists());
}

#[test]
fn test_invalid_json_aborts_after_earlier_files() {
    let ws = Workspace::new();
    ws.add("a_users.ndjson", USERS);
    ws.add("b_broken.ndjson", "{\"id\": 1}\n{\"id\": \n");
    ws.add("c_events.ndjson", EVENTS);

    let err = BatchConverter::new(
        ws.config("r1"),
        DuckDbConverter::new(ParquetCompression::Snappy).unwrap(),
    )
    .unwrap()
    .run()
    .unwrap_err();

    match err {
        Error::Conversion(e) => assert!(e.input.ends_with("b_broken.ndjson")),
        other => panic!("expected conversion error, got {other:?}"),
    }
    assert_eq!(ws.rows("a_users", "r1"), 2);
    assert!(!ws.parquet.join("c_events").exists());
}

#[test]
fn test_rerun_overwrites_table_output() {
    let ws = Workspace::new();
    ws.add("users.ndjson", USERS);
    let engine = DuckDbConverter::new(ParquetCompression::Zstd).unwrap();
    let batch = BatchConverter::new(ws.config("daily"), engine).unwrap();

    batch.run().unwrap();
    assert_eq!(ws.rows("users", "daily"), 2);

    ws.add("users.ndjson", "{\"user_id\": 3, \"email\": \"c@example.com\", \"plan\": \"free\"}\n");
    batch.run().unwrap();

    assert_eq!(ws.rows("users", "daily"), 1);
    assert_eq!(ws.tree(), vec!["users/daily.parquet"]);
}

#[test]
fn test_dotted_table_name() {
    let ws = Workspace::new();
    ws.add("crm.contacts.ndjson", USERS);

    BatchConverter::new(ws.config("r1"), ArrowConverter::new(ParquetCompression::Gzip))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(ws.tree(), vec!["crm.contacts/r1.parquet"]);
}

#[test]
fn test_plan_matches_run() {
    let ws = Workspace::new();
    ws.add("users.ndjson", USERS);
    ws.add("events.ndjson", EVENTS);

    let batch = BatchConverter::new(
        ws.config("r2"),
        DuckDbConverter::new(ParquetCompression::Snappy).unwrap(),
    )
    .unwrap();

    let planned: Vec<PathBuf> = batch.plan().unwrap().into_iter().map(|p| p.output).collect();
    let written: Vec<PathBuf> = batch
        .run()
        .unwrap()
        .tables
        .into_iter()
        .map(|t| t.output)
        .collect();

    assert_eq!(planned, written);
}

#[test]
fn test_missing_run_id_performs_no_writes() {
    let ws = Workspace::new();
    ws.add("users.ndjson", USERS);

    let result = BatchConverter::new(
        ws.config(""),
        DuckDbConverter::new(ParquetCompression::Snappy).unwrap(),
    );

    assert!(matches!(result, Err(Error::MissingConfigField { .. })));
    assert!(!ws.parquet.exists());
}
