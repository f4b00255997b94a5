//! Integration tests for loading a catalog from disk and querying it.
//!
//! Each test writes a small track table and embedding file into a temporary
//! directory, loads them through the public API, and runs the recommender.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ndarray::{array, Array2};
use ndarray_npy::write_npy;
use segue_load::{load_catalog, load_catalog_from, Config, LoadError};
use segue_search::{Recommendation, Recommender};
use tempfile::TempDir;

const TRACKS: &str = "\
track_id,track,artist,album,pos_count
t1,Yesterday,Beatles,Help!,50
t2,Yesterday Once More,Carpenters,Now & Then,30
t3,Hey Jude,Beatles,Hey Jude,80
t4,Bohemian Rhapsody,Queen,A Night at the Opera,95
";

fn embeddings() -> Array2<f32> {
    array![
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 0.1, 0.0],
        [-1.0, 0.0, 0.2],
    ]
}

fn write_fixture(dir: &Path, tracks: &str, embeddings: &Array2<f32>) -> (PathBuf, PathBuf) {
    let catalog_path = dir.join("meta.csv");
    let embeddings_path = dir.join("embeddings.npy");
    std::fs::write(&catalog_path, tracks).unwrap();
    write_npy(&embeddings_path, embeddings).unwrap();
    (catalog_path, embeddings_path)
}

/// Test that a catalog loads and answers a text query end to end
#[test]
fn test_load_and_recommend() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog_path, embeddings_path) =
        write_fixture(temp_dir.path(), TRACKS, &embeddings());

    let config = Config::default().with_paths(Some(catalog_path), Some(embeddings_path));
    let catalog = load_catalog(&config).expect("catalog should load");
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.dimension(), 3);

    let recommender = Recommender::new(Arc::new(catalog));
    let result = recommender
        .recommend("yesterday", None, config.recommend_limit)
        .unwrap();

    let Recommendation::Found {
        original,
        recommendations,
        candidates,
    } = result
    else {
        panic!("expected a match");
    };
    assert_eq!(original.id.as_str(), "t1");
    assert_eq!(recommendations.len(), 3);
    assert_eq!(recommendations[0].id.as_str(), "t3");
    assert_eq!(candidates.len(), 2);
}

/// Test the diverse listing against a loaded catalog
#[test]
fn test_load_and_diverse() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog_path, embeddings_path) =
        write_fixture(temp_dir.path(), TRACKS, &embeddings());

    let catalog = load_catalog_from(catalog_path, embeddings_path).unwrap();
    let recommender = Recommender::new(Arc::new(catalog));

    // Lower half for t1 is t4 (negative) and t2 (orthogonal); t4 is more popular.
    let ranked = recommender.diverse_recommend("t1", 10).unwrap();
    let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["t4", "t2"]);

    assert!(recommender.diverse_recommend("missing", 10).unwrap().is_empty());
}

/// Test search output serializes with the catalog's column names
#[test]
fn test_search_json() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog_path, embeddings_path) =
        write_fixture(temp_dir.path(), TRACKS, &embeddings());

    let catalog = load_catalog_from(catalog_path, embeddings_path).unwrap();
    let recommender = Recommender::new(Arc::new(catalog));

    let results = recommender.search("queen").unwrap();
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["track"], "Bohemian Rhapsody");
    assert_eq!(json[0]["track_id"], "t4");
}

/// Test that a row-count mismatch is reported as a catalog error
#[test]
fn test_row_count_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let short = array![[1.0_f32, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let (catalog_path, embeddings_path) = write_fixture(temp_dir.path(), TRACKS, &short);

    let err = load_catalog_from(catalog_path, embeddings_path).unwrap_err();
    match err {
        LoadError::Catalog(inner) => assert!(inner.is_load_error()),
        other => panic!("unexpected error: {other}"),
    }
}

/// Test that a blank required field is rejected at load time
#[test]
fn test_blank_title_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let tracks = "track_id,track,artist,album,pos_count\nt1,,Beatles,Help!,1\n";
    let (catalog_path, embeddings_path) =
        write_fixture(temp_dir.path(), tracks, &array![[1.0_f32, 0.0]]);

    let err = load_catalog_from(catalog_path, embeddings_path).unwrap_err();
    assert!(matches!(err, LoadError::Catalog(_)));
}

/// Test that a NaN in the embedding file is rejected at load time
#[test]
fn test_nan_embedding_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mut bad = embeddings();
    bad[[2, 1]] = f32::NAN;
    let (catalog_path, embeddings_path) = write_fixture(temp_dir.path(), TRACKS, &bad);

    let err = load_catalog_from(catalog_path, embeddings_path).unwrap_err();
    match err {
        LoadError::Catalog(segue_core::Error::NonFiniteEmbedding { row }) => assert_eq!(row, 2),
        other => panic!("unexpected error: {other}"),
    }
}

/// Test that a missing embedding file is an I/O error
#[test]
fn test_missing_embeddings_file() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("meta.csv");
    std::fs::write(&catalog_path, TRACKS).unwrap();

    let err = load_catalog_from(&catalog_path, temp_dir.path().join("none.npy")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
