//! Runs the built binary against a CSV source in a scratch config directory

use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const CSV: &str = "\
회사,모델,연식(수),키로수,가격(숫자)
현대,아반떼,2020,30000,1650
현대,아반떼,2020,45000,1550
현대,아반떼,2018,80000,1200
기아,K5,2021,160000,2400
";

fn run(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sise-checker"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_show_year_view_as_json() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("cars.csv");
    std::fs::write(&data, CSV).unwrap();

    let out = run(
        dir.path(),
        &["--data", data.to_str().unwrap(), "-f", "json", "show", "현대", "아반떼"],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["series"][0]["label"], "2020년식");
    assert_eq!(json["series"][0]["mean_price"], 1600.0);
    assert_eq!(json["summary"]["count"], 3);
    assert_eq!(
        json["sentence"],
        "아반떼 평균 시세는 2020년식 1,600만원, 2018년식 1,200만원입니다."
    );
}

#[test]
fn test_manufacturers_table() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("cars.csv");
    std::fs::write(&data, CSV).unwrap();

    let out = run(dir.path(), &["--data", data.to_str().unwrap(), "manufacturers"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let kia = stdout.find("기아").unwrap();
    let hyundai = stdout.find("현대").unwrap();
    assert!(kia < hyundai);
}

#[test]
fn test_missing_source_exits_with_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.xlsx");

    let out = run(dir.path(), &["--data", missing.to_str().unwrap(), "manufacturers"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error: "));
}

#[test]
fn test_config_set_and_show() {
    let dir = tempdir().unwrap();

    let out = run(dir.path(), &["config", "--set-mileage-sort", "desc"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Configuration updated"));

    let out = run(dir.path(), &["config", "--show"]);
    assert!(String::from_utf8_lossy(&out.stdout).contains("Mileage sort:     descending"));
}
