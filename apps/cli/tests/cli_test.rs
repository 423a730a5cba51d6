use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use norgate_cli::Cli;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

const PARTS_CSV: &str = include_str!("fixtures/parts.csv");
const ALIASES_JSON: &str = include_str!("fixtures/aliases.json");

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        norgate_cli::logging::init_test_logging();
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/parts.csv"), PARTS_CSV).unwrap();
        std::fs::write(dir.path().join("data/aliases.json"), ALIASES_JSON).unwrap();
        Self { dir }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    fn write_config(&self, body: &str) -> PathBuf {
        let path = self.path("norgate.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    /// Run with an explicit config so the caller's environment never leaks in.
    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let config = self.path("norgate.toml");
        if !config.exists() {
            self.write_config("");
        }
        let mut argv = vec!["norgate", "--config", path_str(&config)];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv)?;
        let mut out = Vec::new();
        cli.execute(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn json_lines(output: &str) -> Vec<Value> {
    output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_assemble_reports_each_name() {
    let ws = Workspace::new();
    let parts = ws.path("data/parts.csv");
    let aliases = ws.path("data/aliases.json");
    let output = ws
        .run(&[
            "assemble",
            "--parts",
            path_str(&parts),
            "--aliases",
            path_str(&aliases),
            "pMOD6-pGRR-F1-yeGFP",
            "notAValidName",
        ])
        .unwrap();

    let records = json_lines(&output);
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["status"], "assembled");
    assert_eq!(records[0]["name"], "pMOD6-pGRR-F1-yeGFP");
    let construct = &records[0]["construct"];
    assert_eq!(construct["name"], "pMOD6-pGRR-F1-yeGFP");
    assert_eq!(
        construct["length"].as_u64().unwrap() as usize,
        construct["sequence"].as_str().unwrap().len()
    );
    assert_eq!(construct["annotations"][0]["label"], "URA3 Promoter");
    assert_eq!(construct["annotations"][0]["start"], 0);

    assert_eq!(records[1]["status"], "mismatch");
    assert_eq!(records[1]["name"], "notAValidName");
}

#[test]
fn test_assembly_errors_fail_the_command() {
    let ws = Workspace::new();
    let parts = ws.path("data/parts.csv");
    let err = ws
        .run(&["assemble", "--parts", path_str(&parts), "pMOD5-pADH1-mCherry"])
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("pMOD5-pADH1-mCherry"), "{message}");
    assert!(message.contains("Unknown homology family: 5"), "{message}");
}

#[test]
fn test_config_file_paths_and_promoter_defaults() {
    let ws = Workspace::new();
    ws.write_config(
        r#"
parts = "data/parts.csv"
aliases = "data/aliases.json"

[promoter]
default_j = "W8"
"#,
    );
    let output = ws.run(&["assemble", "pMOD6-pGRR-W5-yeGFP"]).unwrap();
    let records = json_lines(&output);
    let labels: Vec<&str> = records[0]["construct"]["annotations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["label"].as_str().unwrap())
        .collect();
    assert!(labels.contains(&"W5 target"));
    assert!(labels.contains(&"W8 target"));
}

#[test]
fn test_parse_prints_fields() {
    let ws = Workspace::new();
    let output = ws
        .run(&["parse", "pMOD8-pGRR-W5W8-iRGR-W36", "notAValidName"])
        .unwrap();
    let records = json_lines(&output);
    assert_eq!(records[0]["parsed"]["i"], "W5");
    assert_eq!(records[0]["parsed"]["j"], "W8");
    assert_eq!(records[0]["parsed"]["cassette"]["target"], "W36");
    assert_eq!(records[1]["parsed"], Value::Null);
}

#[test]
fn test_cache_then_list_from_cache() {
    let ws = Workspace::new();
    let parts = ws.path("data/parts.csv");
    let aliases = ws.path("data/aliases.json");
    let db = ws.path("norgate.sqlite");

    let output = ws
        .run(&[
            "cache",
            path_str(&db),
            "--parts",
            path_str(&parts),
            "--aliases",
            path_str(&aliases),
        ])
        .unwrap();
    assert!(output.starts_with("cached 55 part rows and 6 aliases"), "{output}");

    let listing = ws
        .run(&["parts", "--cache", path_str(&db), "--category", "ribozyme"])
        .unwrap();
    let names: Vec<&str> = listing
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(names, vec!["ASBV1 Ribozyme", "HDV Ribozyme", "HH Ribozyme"]);

    // aliases come back out of the cache too
    let output = ws
        .run(&["assemble", "--cache", path_str(&db), "pMOD4-A-RGR-W36"])
        .unwrap();
    assert_eq!(json_lines(&output)[0]["status"], "assembled");
}

#[test]
fn test_missing_catalog_is_reported() {
    let ws = Workspace::new();
    let err = ws.run(&["parts"]).unwrap_err();
    assert!(err.to_string().contains("no parts catalog configured"));
}
