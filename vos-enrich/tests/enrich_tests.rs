//! End-to-end tests for the enrichment pipeline
//!
//! Each test writes its inputs into a scratch directory, runs `enrich`, and
//! inspects the written network file.

use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;
use vos_enrich::{enrich, EnrichPaths, Error, Settings};

const EXAMPLE_DESCRIPTION: &str = "<b>Title: Paper Title\n<a href=\"https://www.scopus.com/record/display.uri?origin=inward&eid=E1\">URL</a></b>";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(network: &str, clusters: &str, items: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("network.json"), network).unwrap();
        std::fs::write(dir.path().join("clusters.txt"), clusters).unwrap();
        std::fs::write(dir.path().join("items.txt"), items).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }

    fn paths(&self) -> EnrichPaths {
        self.paths_between("network.json", "output.json")
    }

    fn paths_between(&self, input: &str, output: &str) -> EnrichPaths {
        EnrichPaths {
            input_network: self.path(input),
            output_network: self.path(output),
            cluster_info: self.path("clusters.txt"),
            item_info: self.path("items.txt"),
        }
    }

    fn read_output(&self, name: &str) -> Value {
        read_json(&self.path(name))
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_example_scenario() {
    let fixture = Fixture::new(
        r#"{"network":{"clusters":[],"items":[{"label":"E1"}]}}"#,
        "1\tAI",
        "E1\tPaper Title",
    );

    let summary = enrich(&fixture.paths(), &Settings::default()).unwrap();

    assert_eq!(summary.clusters, 1);
    assert_eq!(summary.items_total, 1);
    assert_eq!(summary.items_described, 1);
    assert_eq!(
        fixture.read_output("output.json"),
        json!({
            "network": {
                "clusters": [{"cluster": 1, "label": "1. AI"}],
                "items": [{"label": "E1", "description": EXAMPLE_DESCRIPTION}]
            }
        })
    );
}

#[test]
fn test_output_is_indented_two_spaces() {
    let fixture = Fixture::new(
        r#"{"network":{"clusters":[],"items":[{"label":"E1"}]}}"#,
        "1\tAI\n",
        "E1\tPaper Title\n",
    );

    enrich(&fixture.paths(), &Settings::default()).unwrap();

    let text = std::fs::read_to_string(fixture.path("output.json")).unwrap();
    assert!(text.starts_with("{\n  \"network\": {\n    \"clusters\": [\n      {\n"));
    assert!(text.contains("\"cluster\": 1,\n        \"label\": \"1. AI\""));
}

#[test]
fn test_clusters_follow_file_order_and_skip_short_lines() {
    let fixture = Fixture::new(
        r#"{"network":{"clusters":[{"cluster":1,"label":"old","extra":true}],"items":[]}}"#,
        "2\t  Second  \n5\n1\tFirst\textra\n",
        "",
    );

    enrich(&fixture.paths(), &Settings::default()).unwrap();

    assert_eq!(
        fixture.read_output("output.json")["network"]["clusters"],
        json!([
            {"cluster": 2, "label": "2. Second"},
            {"cluster": 1, "label": "1. First"}
        ])
    );
}

#[test]
fn test_unmatched_items_and_unknown_fields_pass_through() {
    let network = r#"{
  "config": {"terminology": {"item": "Publication"}},
  "network": {
    "items": [
      {"id": 7, "label": "E9", "x": -0.25, "cluster": 3, "weights": {"Links": 4}},
      {"id": 8, "label": "E1", "url": "keep"}
    ],
    "links": [{"source_id": 7, "target_id": 8, "strength": 1}],
    "clusters": []
  }
}"#;
    let fixture = Fixture::new(network, "3\tThree\n", "E1\tPaper Title\n");

    enrich(&fixture.paths(), &Settings::default()).unwrap();

    let input: Value = serde_json::from_str(network).unwrap();
    let output = fixture.read_output("output.json");
    assert_eq!(output["config"], input["config"]);
    assert_eq!(output["network"]["links"], input["network"]["links"]);
    assert_eq!(output["network"]["items"][0], input["network"]["items"][0]);
    assert_eq!(
        output["network"]["items"][1],
        json!({"id": 8, "label": "E1", "url": "keep", "description": EXAMPLE_DESCRIPTION})
    );

    // Key order of the document is unchanged
    let keys: Vec<&String> = output["network"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["items", "links", "clusters"]);
}

#[test]
fn test_unmatched_item_text_unchanged() {
    let unmatched = r#"{"id":123456789012345678901234567890,"label":"E9","x":0.12345678901234567890123,"y":-1.0,"weights":{"Links":18446744073709551616}}"#;
    let network = format!(
        r#"{{"network":{{"clusters":[],"items":[{},{{"label":"E1"}}]}}}}"#,
        unmatched
    );
    let fixture = Fixture::new(&network, "1\tAI\n", "E1\tPaper Title\n");

    enrich(&fixture.paths(), &Settings::default()).unwrap();

    let text = std::fs::read_to_string(fixture.path("output.json")).unwrap();
    assert!(text.contains("\"id\": 123456789012345678901234567890,"));
    assert!(text.contains("\"x\": 0.12345678901234567890123,"));
    let output: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        serde_json::to_string(&output["network"]["items"][0]).unwrap(),
        unmatched
    );
}

#[test]
fn test_duplicate_identifier_uses_last_title() {
    let fixture = Fixture::new(
        r#"{"network":{"clusters":[],"items":[{"label":"E1"},{"label":"E1"}]}}"#,
        "",
        "E1\tFirst\nE1\tSecond\n",
    );

    let summary = enrich(&fixture.paths(), &Settings::default()).unwrap();

    assert_eq!(summary.item_records, 1);
    assert_eq!(summary.items_described, 2);
    let output = fixture.read_output("output.json");
    for item in output["network"]["items"].as_array().unwrap() {
        assert!(item["description"]
            .as_str()
            .unwrap()
            .starts_with("<b>Title: Second\n"));
    }
}

#[test]
fn test_second_run_is_idempotent() {
    let fixture = Fixture::new(
        r#"{"network":{"clusters":[],"items":[{"label":"E1"},{"label":"E2","description":"own"}]}}"#,
        "1\tAI\n2\tSystems\n",
        "E1\tPaper Title\n",
    );

    enrich(&fixture.paths_between("network.json", "first.json"), &Settings::default()).unwrap();
    enrich(&fixture.paths_between("first.json", "second.json"), &Settings::default()).unwrap();

    let first = std::fs::read_to_string(fixture.path("first.json")).unwrap();
    let second = std::fs::read_to_string(fixture.path("second.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_bom_prefixed_network() {
    let fixture = Fixture::new(
        "\u{feff}{\"network\":{\"clusters\":[],\"items\":[{\"label\":\"E1\"}]}}",
        "1\tAI\n",
        "E1\tPaper Title\n",
    );

    enrich(&fixture.paths(), &Settings::default()).unwrap();

    let text = std::fs::read_to_string(fixture.path("output.json")).unwrap();
    assert!(!text.starts_with('\u{feff}'));
}

#[test]
fn test_malformed_cluster_line_writes_nothing() {
    let fixture = Fixture::new(
        r#"{"network":{"clusters":[],"items":[{"label":"E1"}]}}"#,
        "1\tAI\nabc\tFoo\n",
        "E1\tPaper Title\n",
    );

    let err = enrich(&fixture.paths(), &Settings::default()).unwrap_err();

    assert!(matches!(err, Error::Format { line: 2, .. }));
    assert!(!fixture.path("output.json").exists());
}

#[test]
fn test_existing_output_untouched_on_failure() {
    let fixture = Fixture::new("{not json", "1\tAI\n", "E1\tPaper Title\n");
    std::fs::write(fixture.path("output.json"), "previous").unwrap();

    let err = enrich(&fixture.paths(), &Settings::default()).unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(std::fs::read_to_string(fixture.path("output.json")).unwrap(), "previous");
}

#[test]
fn test_missing_item_file() {
    let fixture = Fixture::new(r#"{"network":{"items":[]}}"#, "1\tAI\n", "");
    std::fs::remove_file(fixture.path("items.txt")).unwrap();

    let err = enrich(&fixture.paths(), &Settings::default()).unwrap_err();

    match err {
        Error::MissingFile { path, .. } => assert!(path.ends_with("items.txt")),
        other => panic!("expected missing file, got {:?}", other),
    }
    assert!(!fixture.path("output.json").exists());
}

#[test]
fn test_network_without_items_rejected() {
    let fixture = Fixture::new(r#"{"network":{"clusters":[]}}"#, "1\tAI\n", "");

    let err = enrich(&fixture.paths(), &Settings::default()).unwrap_err();

    assert!(matches!(err, Error::Structure(_)));
    assert!(!fixture.path("output.json").exists());
}

#[test]
fn test_unwritable_output() {
    let fixture = Fixture::new(r#"{"network":{"items":[]}}"#, "", "");
    let mut paths = fixture.paths();
    paths.output_network = fixture.path("missing-dir").join("output.json");

    let err = enrich(&paths, &Settings::default()).unwrap_err();

    assert!(matches!(err, Error::Write { .. }));
}

#[test]
fn test_configured_record_url() {
    let fixture = Fixture::new(
        r#"{"network":{"items":[{"label":"E1"}]}}"#,
        "",
        "E1\tPaper Title\n",
    );
    let settings =
        Settings::from_toml_str("[links]\nrecord_url = \"https://example.org/rec/{eid}\"\n").unwrap();

    enrich(&fixture.paths(), &settings).unwrap();

    assert_eq!(
        fixture.read_output("output.json")["network"]["items"][0]["description"],
        json!("<b>Title: Paper Title\n<a href=\"https://example.org/rec/E1\">URL</a></b>")
    );
}
