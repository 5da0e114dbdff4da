use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fruitbasket_core::cache::{Cache, FRUITS_KEY};
use fruitbasket_core::import::{parse_fruits, ParseError};
use fruitbasket_core::storage::FruitRepository;

use super::ImportError;

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub path: PathBuf,
    pub created: usize,
}

/// Replaces every fruit in `repository` with the fruits listed in `path`.
///
/// When `invalidate` is given, the cached `fruits` snapshot is deleted from
/// it after the replace. Otherwise the cache is left alone and keeps serving
/// the old list until it is cleared externally.
pub async fn import_fruits(
    path: &Path,
    repository: &dyn FruitRepository,
    invalidate: Option<&dyn Cache>,
) -> Result<ImportReport, ImportError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| match err.kind() {
            ErrorKind::NotFound => ImportError::FileNotFound {
                path: path.to_path_buf(),
            },
            // Bytes that are not UTF-8 cannot be JSON either.
            ErrorKind::InvalidData => ImportError::InvalidFormat {
                path: path.to_path_buf(),
            },
            _ => ImportError::Load(err.to_string()),
        })?;

    let fruits = parse_fruits(&contents).map_err(|err| match err {
        ParseError::InvalidJson(_) => ImportError::InvalidFormat {
            path: path.to_path_buf(),
        },
        other => ImportError::Load(other.to_string()),
    })?;

    tracing::debug!(path = %path.display(), count = fruits.len(), "Parsed fruits file");

    let created = repository
        .replace_all(&fruits)
        .await
        .map_err(|err| ImportError::Load(err.to_string()))?;

    tracing::info!(path = %path.display(), created, "Replaced fruit store");

    if let Some(cache) = invalidate {
        match cache.delete(FRUITS_KEY).await {
            Ok(()) => tracing::info!("Invalidated cached fruits"),
            Err(err) => tracing::warn!(error = %err, "Failed to invalidate cached fruits"),
        }
    }

    Ok(ImportReport {
        path: path.to_path_buf(),
        created,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use fruitbasket_core::cache::{deserialize_names, CachePresence};
    use fruitbasket_core::fruit::NewFruit;
    use fruitbasket_core::listing::FruitListing;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::inmemory::InMemoryRepository;
    use crate::storage::CachedFruitLister;

    fn fixture(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    async fn repo_with(names: &[&str]) -> InMemoryRepository {
        let repo = InMemoryRepository::new();
        let fruits: Vec<NewFruit> = names.iter().map(|n| NewFruit::new(*n)).collect();
        repo.replace_all(&fruits).await.unwrap();
        repo
    }

    async fn names_in(repo: &InMemoryRepository) -> Vec<String> {
        repo.list_fruits()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect()
    }

    fn memory_cache() -> MemoryCache {
        MemoryCache::new(16).unwrap()
    }

    #[tokio::test]
    async fn test_import_replaces_existing_fruits() {
        let repo = repo_with(&["Old", "Stale"]).await;
        let file = fixture(br#"[{"name":"Apple"},{"name":"Pear"}]"#);

        let report = import_fruits(file.path(), &repo, None).await.unwrap();

        assert_eq!(report.created, 2);
        assert_eq!(report.path, file.path());
        assert_eq!(names_in(&repo).await, vec!["Apple", "Pear"]);
    }

    #[tokio::test]
    async fn test_import_missing_file_leaves_store_untouched() {
        let repo = repo_with(&["Keep"]).await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let result = import_fruits(&path, &repo, None).await;

        let err = result.unwrap_err();
        assert!(matches!(err, ImportError::FileNotFound { .. }));
        assert_eq!(err.to_string(), format!("File not found: {}", path.display()));
        assert_eq!(names_in(&repo).await, vec!["Keep"]);
    }

    #[tokio::test]
    async fn test_import_malformed_json_leaves_store_untouched() {
        let repo = repo_with(&["Keep"]).await;
        let file = fixture(br#"[{"name":"Apple"}"#);

        let result = import_fruits(file.path(), &repo, None).await;

        let err = result.unwrap_err();
        assert!(matches!(err, ImportError::InvalidFormat { .. }));
        assert_eq!(
            err.to_string(),
            format!("Invalid JSON in file: {}", file.path().display())
        );
        assert_eq!(names_in(&repo).await, vec!["Keep"]);
    }

    #[tokio::test]
    async fn test_import_non_utf8_is_invalid_format() {
        let repo = repo_with(&["Keep"]).await;
        let file = fixture(&[0xff, 0xfe, 0x00]);

        let result = import_fruits(file.path(), &repo, None).await;

        assert!(matches!(result, Err(ImportError::InvalidFormat { .. })));
        assert_eq!(names_in(&repo).await, vec!["Keep"]);
    }

    #[tokio::test]
    async fn test_import_missing_name_is_load_error_and_atomic() {
        let repo = repo_with(&["Keep"]).await;
        let file = fixture(br#"[{"name":"Apple"},{"label":"Pear"}]"#);

        let result = import_fruits(file.path(), &repo, None).await;

        let err = result.unwrap_err();
        assert!(matches!(err, ImportError::Load(_)));
        assert!(err.to_string().starts_with("Error loading data: "));
        assert_eq!(names_in(&repo).await, vec!["Keep"]);
    }

    #[tokio::test]
    async fn test_import_directory_is_load_error() {
        let repo = repo_with(&["Keep"]).await;
        let dir = tempfile::tempdir().unwrap();

        let result = import_fruits(dir.path(), &repo, None).await;

        assert!(result.is_err());
        assert_eq!(names_in(&repo).await, vec!["Keep"]);
    }

    #[tokio::test]
    async fn test_import_stores_numeric_name_as_text() {
        let repo = repo_with(&["Old"]).await;
        let file = fixture(br#"[{"name":"Apple"},{"name":42}]"#);

        let report = import_fruits(file.path(), &repo, None).await.unwrap();

        assert_eq!(report.created, 2);
        assert_eq!(names_in(&repo).await, vec!["Apple", "42"]);
    }

    #[tokio::test]
    async fn test_import_null_name_is_load_error() {
        let repo = repo_with(&["Keep"]).await;
        let file = fixture(br#"[{"name":null}]"#);

        let result = import_fruits(file.path(), &repo, None).await;

        assert!(matches!(result, Err(ImportError::Load(_))));
        assert_eq!(names_in(&repo).await, vec!["Keep"]);
    }

    #[tokio::test]
    async fn test_import_empty_array_clears_store() {
        let repo = repo_with(&["Old"]).await;
        let file = fixture(b"[]");

        let report = import_fruits(file.path(), &repo, None).await.unwrap();

        assert_eq!(report.created, 0);
        assert!(names_in(&repo).await.is_empty());
    }

    #[tokio::test]
    async fn test_import_without_invalidation_keeps_cache_stale() {
        let repo = Arc::new(repo_with(&["Apple", "Pear"]).await);
        let cache = Arc::new(memory_cache());
        let lister = CachedFruitLister::new(
            repo.clone(),
            cache.clone(),
            CachePresence::KeyExists,
            None,
        );
        lister.list().await.unwrap();

        let file = fixture(br#"[{"name":"Cherry"}]"#);
        import_fruits(file.path(), &*repo, None).await.unwrap();

        let listing = lister.list().await.unwrap();
        assert_eq!(
            listing,
            FruitListing::from_cache(vec!["Apple".to_string(), "Pear".to_string()])
        );
    }

    #[tokio::test]
    async fn test_import_with_invalidation_clears_cached_fruits() {
        let repo = Arc::new(repo_with(&["Apple", "Pear"]).await);
        let cache = Arc::new(memory_cache());
        let lister = CachedFruitLister::new(
            repo.clone(),
            cache.clone(),
            CachePresence::KeyExists,
            None,
        );
        lister.list().await.unwrap();

        let file = fixture(br#"[{"name":"Cherry"}]"#);
        import_fruits(file.path(), &*repo, Some(&*cache as &dyn Cache)).await.unwrap();

        assert!(cache.get(FRUITS_KEY).await.unwrap().is_none());
        let listing = lister.list().await.unwrap();
        assert_eq!(listing, FruitListing::from_store(vec!["Cherry".to_string()]));
    }

    #[tokio::test]
    async fn test_failed_import_does_not_invalidate_cache() {
        let repo = repo_with(&["Apple"]).await;
        let cache = memory_cache();
        cache.set(FRUITS_KEY, br#"["Apple"]"#, None).await.unwrap();
        let file = fixture(b"{oops");

        let result = import_fruits(file.path(), &repo, Some(&cache as &dyn Cache)).await;

        assert!(result.is_err());
        let bytes = cache.get(FRUITS_KEY).await.unwrap().unwrap();
        assert_eq!(deserialize_names(&bytes).unwrap(), vec!["Apple"]);
    }
}
