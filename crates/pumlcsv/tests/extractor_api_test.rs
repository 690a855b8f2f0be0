//! Integration tests for the Extractor API
//!
//! These run the discovery, scan and export stages end to end over temporary
//! directories.

use std::{fs, path::Path};

use tempfile::tempdir;

use pumlcsv::{
    ElementType, Extractor,
    config::{AppConfig, CsvConfig, DiscoveryConfig},
};

const SHOP: &str = "\
@startuml
actor User
class \"Order System\" as OS
User --> OS : places order
@enduml
";

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn raw_extractor() -> Extractor {
    Extractor::new(AppConfig::new(
        DiscoveryConfig::default(),
        CsvConfig::new(true),
    ))
}

#[test]
fn test_order_system_scenario() {
    let dir = tempdir().unwrap();
    write(dir.path(), "shop.puml", SHOP);

    let extractor = Extractor::default();
    let files = extractor.discover(dir.path());
    let records = extractor.extract(&files).unwrap();

    assert_eq!(records.len(), 3);

    let rows: Vec<_> = records
        .iter()
        .map(|r| (r.element_type(), r.source(), r.target(), r.relation(), r.label()))
        .collect();
    assert_eq!(
        rows,
        [
            (ElementType::Node, "User", "", "actor", ""),
            (ElementType::Node, "Order System", "", "class", ""),
            (ElementType::Edge, "User", "OS", "-->", "places order"),
        ]
    );
}

#[test]
fn test_records_follow_file_then_line_order() {
    let dir = tempdir().unwrap();
    write(dir.path(), "b.plantuml", "actor FromPlantuml\n");
    write(dir.path(), "b.puml", "actor B1\nB1 -> B2\n");
    write(dir.path(), "a.puml", "actor A1\n");

    let extractor = Extractor::default();
    let files = extractor.discover(dir.path());
    let records = extractor.extract(&files).unwrap();

    let sources: Vec<_> = records.iter().map(|r| r.source()).collect();
    assert_eq!(sources, ["A1", "B1", "B1", "FromPlantuml"]);
}

#[test]
fn test_row_count_matches_classified_lines() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "mixed.puml",
        "@startuml\n' comment\n\n// another\nactor A\nnote left: skipped\nA -> B\npackage p {\n}\n",
    );
    write(dir.path(), "nested/more.puml", "class C\nC <|-- D\nC ..> E : uses\n");

    let extractor = Extractor::default();
    let files = extractor.discover(dir.path());
    let records = extractor.extract(&files).unwrap();
    assert_eq!(records.len(), 5);

    let output = dir.path().join("out.csv");
    let summary = extractor.write_csv(&output, &records, files.len()).unwrap();
    assert_eq!(summary.rows(), 5);
    assert_eq!(summary.files(), 2);

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv.lines().count(), 1 + 5);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = tempdir().unwrap();
    write(dir.path(), "shop.puml", SHOP);
    write(dir.path(), "other.plantuml", "A --> B : \"quoted, label\"\n");
    let output = dir.path().join("out.csv");

    let extractor = raw_extractor();
    let mut outputs = Vec::new();
    for _ in 0..2 {
        let files = extractor.discover(dir.path());
        let records = extractor.extract(&files).unwrap();
        extractor.write_csv(&output, &records, files.len()).unwrap();
        outputs.push(fs::read(&output).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_raw_column_equals_original_line() {
    let dir = tempdir().unwrap();
    write(dir.path(), "shop.puml", "  actor   User  \r\nUser -> Shop : buys\r\n");

    let extractor = raw_extractor();
    let files = extractor.discover(dir.path());
    let records = extractor.extract(&files).unwrap();

    let raws: Vec<_> = records.iter().map(|r| r.raw()).collect();
    assert_eq!(raws, ["  actor   User  ", "User -> Shop : buys"]);

    let output = dir.path().join("out.csv");
    extractor.write_csv(&output, &records, files.len()).unwrap();
    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("file,lineno,element_type,source,target,relation,label,raw\r\n"));
    assert!(csv.contains(",1,node,User,,actor,,  actor   User  \r\n"));
}

#[test]
fn test_unreadable_file_aborts_extraction() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.puml", "actor A\n");

    let extractor = Extractor::default();
    let mut files = extractor.discover(dir.path());
    files.insert(0, dir.path().join("vanished.puml"));

    assert!(extractor.extract(&files).is_err());
}
