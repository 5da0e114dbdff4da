//! `fruitbasket load_fruits <json_file>`: replace the fruit store from a JSON file.
//!
//! Outcomes are reported as printed messages only; the process exits 0
//! whether or not the import succeeded.

use std::path::PathBuf;
use std::sync::Arc;

use fruitbasket_core::cache::Cache;

use crate::{
    config::Config,
    import::{import_fruits, ImportError, ImportReport},
    output::{self, aprintln},
    storage,
};

/// Load fruits command arguments.
#[derive(Debug, clap::Args)]
pub struct LoadFruitsCommand {
    /// Path to the JSON file, an array of `{"name": "..."}` objects
    pub json_file: PathBuf,
}

/// Run the load_fruits command.
pub async fn run(cmd: LoadFruitsCommand, sqlite_path: &str, config: Config) -> anyhow::Result<()> {
    let result = load(&cmd, sqlite_path, &config).await;

    if let Err(err) = &result {
        tracing::debug!(error = ?err, "Import failed");
    }

    for line in outcome_lines(&result) {
        aprintln!("{}", line);
    }

    Ok(())
}

async fn load(
    cmd: &LoadFruitsCommand,
    sqlite_path: &str,
    config: &Config,
) -> Result<ImportReport, ImportError> {
    let repository = storage::open(sqlite_path)
        .await
        .map_err(|err| ImportError::Load(err.to_string()))?;

    let invalidate = if config.cache_invalidation.invalidates_on_import() {
        invalidation_cache(config).await?
    } else {
        None
    };

    import_fruits(&cmd.json_file, repository.as_ref(), invalidate.as_deref()).await
}

/// The cache an import should clear, if this process can reach it.
///
/// The in-memory cache lives inside each server process, so there is
/// nothing here to invalidate.
#[cfg(feature = "memory")]
async fn invalidation_cache(_config: &Config) -> Result<Option<Arc<dyn Cache>>, ImportError> {
    tracing::warn!(
        "The in-memory cache lives inside each server process; \
        load_fruits cannot invalidate it"
    );
    Ok(None)
}

/// The cache an import should clear, if this process can reach it.
#[cfg(feature = "redis")]
async fn invalidation_cache(config: &Config) -> Result<Option<Arc<dyn Cache>>, ImportError> {
    crate::cache::connect(config)
        .await
        .map(Some)
        .map_err(|err| ImportError::Load(err.to_string()))
}

/// Colored messages printed for an import outcome, in order.
fn outcome_lines(result: &Result<ImportReport, ImportError>) -> Vec<String> {
    match result {
        Ok(report) => vec![
            output::success("Cleared existing fruits data"),
            output::success(&format!(
                "Successfully loaded {} fruits from {}",
                report.created,
                report.path.display()
            )),
        ],
        Err(err) => vec![output::error(&err.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_lines_for_success() {
        let report = ImportReport {
            path: PathBuf::from("fruits.json"),
            created: 2,
        };

        assert_eq!(
            outcome_lines(&Ok(report)),
            vec![
                output::success("Cleared existing fruits data"),
                output::success("Successfully loaded 2 fruits from fruits.json"),
            ]
        );
    }

    #[test]
    fn test_outcome_lines_for_empty_import() {
        let report = ImportReport {
            path: PathBuf::from("/tmp/empty.json"),
            created: 0,
        };

        assert_eq!(
            outcome_lines(&Ok(report))[1],
            output::success("Successfully loaded 0 fruits from /tmp/empty.json")
        );
    }

    #[test]
    fn test_outcome_lines_for_failure() {
        let err = ImportError::FileNotFound {
            path: PathBuf::from("nope.json"),
        };

        assert_eq!(
            outcome_lines(&Err(err)),
            vec![output::error("File not found: nope.json")]
        );
    }

    #[tokio::test]
    async fn test_run_succeeds_when_import_fails() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("fruitbasket.db");
        let cmd = LoadFruitsCommand {
            json_file: dir.path().join("nope.json"),
        };

        let result = run(cmd, db_path.to_str().unwrap(), Config::default()).await;

        assert!(result.is_ok());
    }

    #[cfg(feature = "memory")]
    #[tokio::test]
    async fn test_memory_backend_has_no_cache_to_invalidate() {
        let config = Config {
            cache_invalidation: fruitbasket_core::cache::InvalidationPolicy::OnImport,
            ..Config::default()
        };

        let cache = invalidation_cache(&config).await.unwrap();

        assert!(cache.is_none());
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_load_into_sqlite_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("fruitbasket.db");
        let json_path = dir.path().join("fruits.json");
        let mut file = std::fs::File::create(&json_path).unwrap();
        file.write_all(br#"[{"name":"Apple"},{"name":"Pear"}]"#)
            .unwrap();

        let cmd = LoadFruitsCommand {
            json_file: json_path.clone(),
        };
        let report = load(&cmd, db_path.to_str().unwrap(), &Config::default())
            .await
            .unwrap();

        assert_eq!(report.created, 2);
        assert_eq!(report.path, json_path);

        let repository = storage::open(db_path.to_str().unwrap()).await.unwrap();
        let names: Vec<String> = repository
            .list_fruits()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Apple", "Pear"]);
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_load_missing_file_keeps_sqlite_store() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("fruitbasket.db");

        let repository = storage::open(db_path.to_str().unwrap()).await.unwrap();
        repository
            .replace_all(&[fruitbasket_core::fruit::NewFruit::new("Keep")])
            .await
            .unwrap();

        let cmd = LoadFruitsCommand {
            json_file: dir.path().join("nope.json"),
        };
        let result = load(&cmd, db_path.to_str().unwrap(), &Config::default()).await;

        assert!(matches!(result, Err(ImportError::FileNotFound { .. })));
        assert_eq!(repository.count_fruits().await.unwrap(), 1);
    }
}
