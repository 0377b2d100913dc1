#![allow(dead_code)]

//! Shared helpers for the integration tests

use std::path::PathBuf;

/// Path of a model under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub mod temp_models {
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// A model written into its own temporary directory.
    ///
    /// The directory is removed when the value is dropped, so keep it alive
    /// for as long as the path is used.
    pub struct TempModel {
        pub dir: TempDir,
        pub path: PathBuf,
    }

    impl TempModel {
        /// Drop a `jdl-json.toml` next to the model
        pub fn with_config(self, toml: &str) -> Self {
            std::fs::write(self.dir.path().join("jdl-json.toml"), toml).unwrap();
            self
        }
    }

    pub fn create_temp_model(content: &str, file_name: &str) -> TempModel {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(file_name);
        std::fs::write(&path, content).unwrap();
        TempModel { dir, path }
    }

    pub fn create_temp_yaml(content: &str) -> TempModel {
        create_temp_model(content, "model.yaml")
    }

    pub fn create_temp_json(content: &str) -> TempModel {
        create_temp_model(content, "model.json")
    }
}

pub mod models {
    use chrono::{DateTime, TimeZone, Utc};

    /// 2019-01-01T09:30:00Z, the timestamp of `tests/fixtures/jdl-json.toml`
    pub fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 1, 1, 9, 30, 0).unwrap()
    }
}
