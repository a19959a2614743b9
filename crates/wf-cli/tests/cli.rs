//! CLI command integration tests.
//! Each test works in its own temp directory for full isolation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wf_cmd() -> Command {
    #[allow(deprecated)]
    let cmd = Command::cargo_bin("wf").unwrap();
    cmd
}

#[test]
fn tokens_inline_text() {
    wf_cmd()
        .args(["tokens", "The Fox. The fox!"])
        .assert()
        .success()
        .stdout("the\nfox\nthe\nfox\n");
}

#[test]
fn tokens_collapse_delimiters() {
    wf_cmd()
        .args(["tokens", "  fox   dog  "])
        .assert()
        .success()
        .stdout("fox\ndog\n");
}

#[test]
fn tokens_from_markdown_file() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("doc.md");
    std::fs::write(
        &doc,
        "# The Fox\n\nA *quick* fox, see [the fox](https://zebra.example/path).",
    )
    .unwrap();

    wf_cmd()
        .args(["tokens", "--file"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("fox"))
        .stdout(predicate::str::contains("zebra").not());
}

#[test]
fn analyze_reports_match_counts() {
    wf_cmd()
        .args([
            "analyze",
            "--text",
            "The quick brown fox jumped over the lazy dog. \
             The lazy dog slept on the quick brown fox.",
            "--term",
            "fox=#aa00ff",
            "--term",
            "dog=#00ffaa",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("slot 1: 'fox' → 2 matches, 20 cubes"))
        .stdout(predicate::str::contains("slot 2: 'dog' → 2 matches, 20 cubes"))
        .stdout(predicate::str::contains("scene: 40 cubes from 18 tokens"));
}

#[test]
fn analyze_writes_scene_json() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("scene.json");

    wf_cmd()
        .args([
            "analyze",
            "--text",
            "the fox and the other fox",
            "--term",
            "fox=#aa00ff",
            "--seed",
            "7",
            "--out",
        ])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote"));

    let json = std::fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["version"], "0.1");
    let nodes = value["scene"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 20);
    for node in nodes {
        assert_eq!(node["color"], "#aa00ff");
        assert_eq!(node["size"], 0.5);
    }
}

#[test]
fn analyze_seeded_runs_only_differ_in_node_ids() {
    let dir = TempDir::new().unwrap();
    let out_a = dir.path().join("a.json");
    let out_b = dir.path().join("b.json");

    for out in [&out_a, &out_b] {
        wf_cmd()
            .args([
                "analyze",
                "--text",
                "fox dog fox",
                "--term",
                "fox=#aa00ff",
                "--seed",
                "42",
                "--out",
            ])
            .arg(out)
            .assert()
            .success();
    }

    let parse = |path: &std::path::Path| -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    };
    let a = parse(&out_a);
    let b = parse(&out_b);

    let positions = |v: &serde_json::Value| -> Vec<serde_json::Value> {
        v["scene"]["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["position"].clone())
            .collect()
    };
    assert_eq!(positions(&a), positions(&b), "same seed, same jitter");
}

#[test]
fn analyze_zero_matches_is_silent() {
    wf_cmd()
        .args(["analyze", "--text", "nothing here", "--term", "zebra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 matches, 0 cubes"))
        .stdout(predicate::str::contains("scene: 0 cubes"));
}

#[test]
fn analyze_rejects_bad_color() {
    wf_cmd()
        .args(["analyze", "--text", "fox", "--term", "fox=#zzzzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color"));
}

#[test]
fn analyze_rejects_fourth_term() {
    wf_cmd()
        .args([
            "analyze", "--text", "fox", "--term", "a", "--term", "b", "--term", "c", "--term",
            "d",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 3"));
}

#[test]
fn analyze_requires_some_source() {
    wf_cmd()
        .args(["analyze", "--term", "fox"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no source text"));
}

#[test]
fn analyze_from_config_file() {
    let dir = TempDir::new().unwrap();
    let cfg = dir.path().join("analysis.toml");
    let out = dir.path().join("scene.json");
    std::fs::write(
        &cfg,
        r##"
source-text = "the fox chased the dog"
term1 = "fox"
color1 = "#aa00ff"
term2 = "dog"
color2 = "#00ffaa"
term3 = ""
"##,
    )
    .unwrap();

    wf_cmd()
        .args(["analyze", "--config"])
        .arg(&cfg)
        .args(["--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("slot 1: 'fox' → 1 matches"))
        .stdout(predicate::str::contains("slot 2: 'dog' → 1 matches"));

    assert!(out.exists());
}

#[test]
fn analyze_config_conflicts_with_flags() {
    let dir = TempDir::new().unwrap();
    let cfg = dir.path().join("analysis.toml");
    std::fs::write(&cfg, "source-text = \"fox\"\nterm1 = \"fox\"\n").unwrap();

    wf_cmd()
        .args(["analyze", "--text", "fox", "--config"])
        .arg(&cfg)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--config replaces"));
}

#[test]
fn demo_runs_builtin_defaults() {
    wf_cmd()
        .args(["demo", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slot 1: 'fox' → 2 matches"))
        .stdout(predicate::str::contains("slot 2: 'dog' → 2 matches"))
        .stdout(predicate::str::contains("scene: 40 cubes from 18 tokens"));
}
