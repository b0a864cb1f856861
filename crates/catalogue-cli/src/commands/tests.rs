use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::{query_payload, run};
use crate::cli::{CategoryArgs, Commands, CompareArgs, SearchArgs, SubjectArgs, ThinkerArgs};
use catalogue_core::{Catalogue, CatalogueConfig};

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dir");
    }
    fs::write(path, body).expect("write fixture");
}

fn seed(root: &Path) {
    write(
        root,
        "index.json",
        r#"{"categories": [{"id": "anarchists", "name": "Anarchists", "path": "anarchists", "count": 2}]}"#,
    );
    write(
        root,
        "anarchists/metadata.json",
        r#"[
            {"n": "Mikhail Bakunin", "c": "Anarchists", "d": "Rival of Marx", "b": "", "i": "", "w": 1,
             "subjects": [{"name": "Letters", "count": 1}]},
            {"n": "Peter Kropotkin", "c": "Anarchists", "d": "Mutual aid", "b": "", "i": "", "w": 1,
             "subjects": [{"name": "Letters", "count": 1}]}
        ]"#,
    );
    write(
        root,
        "anarchists/Mikhail Bakunin/Letters.json",
        r#"[{"title": "Letter to Herzen", "url": "herzen"}]"#,
    );
    write(
        root,
        "anarchists/Peter Kropotkin/Letters.json",
        r#"[{"title": "Letter to Lenin", "url": "lenin"}]"#,
    );
}

fn config(root: &Path) -> CatalogueConfig {
    CatalogueConfig::default().with_data_root(root)
}

#[tokio::test]
async fn read_commands_produce_endpoint_payloads() {
    let temp = tempdir().expect("tempdir");
    seed(temp.path());
    let catalogue = Catalogue::from_config(&config(temp.path()));

    let categories = query_payload(&catalogue, Commands::Categories)
        .await
        .expect("categories");
    assert_eq!(categories["count"], 1);

    let category = query_payload(
        &catalogue,
        Commands::Category(CategoryArgs {
            key: "Anarchists".to_string(),
        }),
    )
    .await
    .expect("category");
    assert_eq!(category["count"], 2);

    let thinker = query_payload(
        &catalogue,
        Commands::Thinker(ThinkerArgs {
            category: "anarchists".to_string(),
            name: "Mikhail Bakunin".to_string(),
            metadata_only: false,
        }),
    )
    .await
    .expect("thinker");
    assert_eq!(thinker["works"][0]["title"], "Letter to Herzen");

    let subjects = query_payload(
        &catalogue,
        Commands::Thinker(ThinkerArgs {
            category: "anarchists".to_string(),
            name: "Mikhail Bakunin".to_string(),
            metadata_only: true,
        }),
    )
    .await
    .expect("subjects");
    assert_eq!(subjects["subjects"], serde_json::json!(["Letters"]));

    let works = query_payload(
        &catalogue,
        Commands::Subject(SubjectArgs {
            category: "anarchists".to_string(),
            name: "Peter Kropotkin".to_string(),
            subject: "Letters".to_string(),
        }),
    )
    .await
    .expect("subject");
    assert_eq!(works["count"], 1);

    let search = query_payload(
        &catalogue,
        Commands::Search(SearchArgs {
            query: Some("kropotkin".to_string()),
            category: None,
        }),
    )
    .await
    .expect("search");
    assert_eq!(search["results"][0]["name"], "Peter Kropotkin");

    let compare = query_payload(
        &catalogue,
        Commands::Compare(CompareArgs {
            names: "Mikhail Bakunin,Peter Kropotkin".to_string(),
        }),
    )
    .await
    .expect("compare");
    assert_eq!(compare["sharedSubjects"], serde_json::json!(["Letters"]));

    let stats = query_payload(&catalogue, Commands::Stats).await.expect("stats");
    assert_eq!(stats["totalWorks"], 2);
}

#[tokio::test]
async fn unknown_thinker_is_an_error() {
    let temp = tempdir().expect("tempdir");
    seed(temp.path());
    let catalogue = Catalogue::from_config(&config(temp.path()));

    let err = query_payload(
        &catalogue,
        Commands::Thinker(ThinkerArgs {
            category: "anarchists".to_string(),
            name: "Nobody".to_string(),
            metadata_only: false,
        }),
    )
    .await
    .expect_err("missing thinker");
    assert!(err.to_string().contains("thinker not found"));
}

#[test]
fn audit_passes_on_consistent_store_and_fails_on_drift() {
    let temp = tempdir().expect("tempdir");
    seed(temp.path());
    run(&config(temp.path()), Commands::Audit).expect("consistent store");

    write(temp.path(), "anarchists/Peter Kropotkin/Stray.json", "[]");
    let err = run(&config(temp.path()), Commands::Audit).expect_err("orphan file");
    assert!(err.to_string().contains("1 inconsistencies"));
}

#[test]
fn read_commands_fail_without_an_index() {
    let temp = tempdir().expect("tempdir");
    assert!(run(&config(temp.path()), Commands::Stats).is_err());
}
