#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;

use ecovision::db::seed::{parse_seed_data, seed_repository};
use ecovision::db::LocalRepository;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::const_new(());

/// Runs `f` with environment variables temporarily set (`Some`) or removed
/// (`None`), restoring them afterwards even on panic.
///
/// Env vars are process-global, so callers are serialized.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.blocking_lock();
    let _restore = EnvRestore::apply(changes);
    f()
}

/// Async form of [`with_scoped_env`] for `#[tokio::test]` bodies.
pub async fn with_scoped_env_async<Fut>(changes: &[(&str, Option<&str>)], fut: Fut) -> Fut::Output
where
    Fut: Future,
{
    let _lock = ENV_LOCK.lock().await;
    let _restore = EnvRestore::apply(changes);
    fut.await
}

struct EnvRestore {
    previous: HashMap<String, Option<String>>,
}

impl EnvRestore {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let mut previous = HashMap::new();
        for (key, value) in changes {
            previous
                .entry(key.to_string())
                .or_insert_with(|| std::env::var(key).ok());
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
        Self { previous }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain() {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// Two locations, two metrics and a small temperature/precipitation history.
///
/// Irvine temperature rises from 10 to 20 across the month; Oslo
/// precipitation is flat apart from one outlier on 2025-03-06.
pub const SEED_JSON: &str = r#"{
  "locations": [
    {"id": 1, "name": "Irvine", "country": "USA", "latitude": 33.68, "longitude": -117.83, "region": "California"},
    {"id": 2, "name": "Oslo", "country": "Norway", "latitude": 59.91, "longitude": 10.75}
  ],
  "metrics": [
    {"id": 1, "name": "temperature", "display_name": "Temperature", "unit": "celsius", "description": "Daily mean"},
    {"id": 2, "name": "precipitation", "display_name": "Precipitation", "unit": "mm", "description": "Daily total"}
  ],
  "climate_data": [
    {"id": 1, "location_id": 1, "metric_id": 1, "date": "2025-03-01", "value": 10.0, "quality": "excellent"},
    {"id": 2, "location_id": 1, "metric_id": 1, "date": "2025-03-02", "value": 10.0, "quality": "good"},
    {"id": 3, "location_id": 1, "metric_id": 1, "date": "2025-03-03", "value": 10.0, "quality": "excellent"},
    {"id": 4, "location_id": 1, "metric_id": 1, "date": "2025-03-04", "value": 20.0, "quality": "good"},
    {"id": 5, "location_id": 1, "metric_id": 1, "date": "2025-03-05", "value": 20.0, "quality": "excellent"},
    {"id": 6, "location_id": 1, "metric_id": 1, "date": "2025-03-06", "value": 20.0, "quality": "good"},
    {"id": 7, "location_id": 2, "metric_id": 2, "date": "2025-03-01", "value": 2.0, "quality": "good"},
    {"id": 8, "location_id": 2, "metric_id": 2, "date": "2025-03-02", "value": 2.1, "quality": "good"},
    {"id": 9, "location_id": 2, "metric_id": 2, "date": "2025-03-03", "value": 1.9, "quality": "questionable"},
    {"id": 10, "location_id": 2, "metric_id": 2, "date": "2025-03-04", "value": 2.0, "quality": "good"},
    {"id": 11, "location_id": 2, "metric_id": 2, "date": "2025-03-05", "value": 2.2, "quality": "poor"},
    {"id": 12, "location_id": 2, "metric_id": 2, "date": "2025-03-06", "value": 40.0, "quality": "good"},
    {"id": 13, "location_id": 2, "metric_id": 2, "date": "2025-03-07", "value": 1.8, "quality": "good"},
    {"id": 14, "location_id": 2, "metric_id": 2, "date": "2025-03-08", "value": 2.0, "quality": "excellent"},
    {"id": 15, "location_id": 2, "metric_id": 2, "date": "2025-03-09", "value": 2.1, "quality": "good"},
    {"id": 16, "location_id": 2, "metric_id": 2, "date": "2025-03-10", "value": 1.9, "quality": "good"}
  ]
}"#;

/// Repository loaded with [`SEED_JSON`].
pub async fn seeded_repository() -> LocalRepository {
    let repo = LocalRepository::new();
    let data = parse_seed_data(SEED_JSON).expect("fixture parses");
    seed_repository(&repo, &data).await.expect("fixture seeds");
    repo
}

/// Write `contents` to a temporary file kept alive by the returned handle.
pub fn write_temp_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// The seed file shipped with the crate.
pub fn bundled_seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("sample_data.json")
}
