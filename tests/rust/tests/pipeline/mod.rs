//! End-to-end pipeline tests
//!
//! Load the catalog from a source, build the batch, write the seed file and
//! read it back.

use pretty_assertions::assert_eq;

use mcpseed_core::{
    write_seed, BatchBuilder, CatalogSource, FileCatalogSource, SeedError, ServerDescriptor,
};
use tests::fixtures::{sample_catalog, sample_catalog_path};
use tests::init_test_tracing;

#[tokio::test]
async fn test_file_catalog_to_seed_file() {
    init_test_tracing();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("seed.json");

    let catalog = FileCatalogSource::new(sample_catalog_path())
        .load()
        .await
        .unwrap();
    assert_eq!(catalog.name, "docker-mcp");
    assert_eq!(catalog.len(), 5);

    let servers = BatchBuilder::new().build(&catalog);
    write_seed(&output, &servers).await.unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("[\n  {"));

    let written: Vec<ServerDescriptor> = serde_json::from_str(&content).unwrap();
    assert_eq!(written, servers);
    assert_eq!(written.len(), 4);
}

#[tokio::test]
async fn test_seed_output_is_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    for path in [&first, &second] {
        let catalog = FileCatalogSource::new(sample_catalog_path())
            .load()
            .await
            .unwrap();
        write_seed(path, &BatchBuilder::new().build(&catalog))
            .await
            .unwrap();
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[tokio::test]
async fn test_file_source_matches_in_memory_fixture() {
    let loaded = FileCatalogSource::new(sample_catalog_path())
        .load()
        .await
        .unwrap();
    let expected = sample_catalog();

    assert_eq!(
        loaded.registry.keys().collect::<Vec<_>>(),
        expected.registry.keys().collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_invalid_catalog_is_a_boundary_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, r#"{"registry": {"x": {"env": "not-a-list"}}}"#).unwrap();

    let err = FileCatalogSource::new(&path).load().await.unwrap_err();
    assert!(matches!(err, SeedError::CatalogDecode { .. }));
}
