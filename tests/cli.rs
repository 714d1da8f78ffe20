//! End-to-end tests for the `logica` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn logica() -> Command {
    let mut cmd = Command::cargo_bin("logica").expect("binary to build");
    // Keep a user's logica.toml out of the picture
    cmd.current_dir(std::env::temp_dir());
    cmd
}

fn dictionary_file(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn parse_prints_canonical_form() {
    logica()
        .args(["parse", "p -> q"])
        .assert()
        .success()
        .stdout("P → Q\n");
}

#[test]
fn parse_reports_invalid_symbol() {
    logica()
        .args(["parse", "A # B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid symbol '#' at offset 2"));
}

#[test]
fn parse_reports_deep_nesting_as_an_error() {
    let depth = 20_000;
    let formula = format!("{}A{}", "(".repeat(depth), ")".repeat(depth));
    logica()
        .arg("parse")
        .arg(formula)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nests deeper than 256 levels"));
}

#[test]
fn parse_rejects_unknown_format() {
    logica()
        .args(["parse", "A", "--format", "latex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format 'latex'"));
}

#[test]
fn parse_json_output() {
    logica()
        .args(["parse", "¬A", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"not\""))
        .stdout(predicate::str::contains("\"name\": \"A\""));
}

#[test]
fn parse_treeviz_uses_default_dictionary() {
    logica()
        .args(["parse", "A ∧ B", "--format", "treeviz"])
        .assert()
        .success()
        .stdout("└─ ∧ AND\n  ├─ ◦ A: está chovendo\n  └─ ◦ B: levarei guarda-chuva\n");
}

#[test]
fn realize_with_default_dictionary() {
    logica()
        .args(["realize", "A -> B"])
        .assert()
        .success()
        .stdout("Se está chovendo, então levarei guarda-chuva\n");
}

#[test]
fn realize_with_json_dictionary_file() {
    let file = dictionary_file(r#"{"A": "João estuda", "B": "Maria passa"}"#, ".json");
    logica()
        .args(["realize", "A xor B", "--dict"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("João estuda ou Maria passa (mas não ambos)\n");
}

#[test]
fn realize_with_yaml_dictionary_file() {
    let file = dictionary_file("A: chove\nB: venta\n", ".yaml");
    logica()
        .args(["realize", "A & B", "--dict"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("chove e venta\n");
}

#[test]
fn dictionary_as_json() {
    logica()
        .args(["dictionary", "Se está chovendo, então levarei guarda-chuva."])
        .assert()
        .success()
        .stdout("{\n  \"A\": \"está chovendo\",\n  \"B\": \"levarei guarda-chuva\"\n}\n");
}

#[test]
fn dictionary_as_yaml() {
    logica()
        .args(["dictionary", "chove e venta", "--format", "yaml"])
        .assert()
        .success()
        .stdout("A: chove\nB: venta\n");
}

#[test]
fn translate_with_check_prints_canonical_formula() {
    logica()
        .args([
            "translate",
            "Se está chovendo, então levarei guarda-chuva.",
            "--check",
        ])
        .assert()
        .success()
        .stdout("A → B\n");
}

#[test]
fn translate_without_check_prints_raw_rewrite() {
    logica()
        .args(["translate", "Se está chovendo, então levarei guarda-chuva."])
        .assert()
        .success()
        .stdout("( A ) → ( B )\n");
}

#[test]
fn translate_check_fails_on_unparseable_output() {
    logica()
        .args(["translate", "hoje chove", "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Formula error"));
}

#[test]
fn config_file_changes_default_format() {
    let config = dictionary_file("[output]\nformat = \"natural\"\n", ".toml");
    logica()
        .args(["parse", "¬C", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout("Não é verdade que a rua está molhada\n");
}

#[test]
fn format_flags_win_over_config_file() {
    let config = dictionary_file(
        "[output]\nformat = \"natural\"\ndictionary_format = \"yaml\"\n",
        ".toml",
    );
    logica()
        .args(["parse", "¬C", "--format", "symbolic", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout("¬C\n");
    logica()
        .args(["dictionary", "chove", "--format", "json", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout("{\n  \"A\": \"chove\"\n}\n");
}

#[test]
fn missing_config_file_is_an_error() {
    logica()
        .args(["parse", "A", "--config", "/nonexistent/logica.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
