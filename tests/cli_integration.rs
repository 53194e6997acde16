use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("aitarif-{prefix}-{}-{nanos}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

fn run_aitarif(args: &[&str], home: &Path) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_aitarif").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("aitarif.exe");
        } else {
            path.push("aitarif");
        }
        path.to_string_lossy().into_owned()
    });
    let mut cmd = Command::new(bin);
    cmd.args(args);
    // Isolate from any real user config
    cmd.env("HOME", home);
    cmd.env_remove("XDG_CONFIG_HOME");
    let output = cmd.output().expect("run aitarif");
    (output.status.success(), output.stdout, output.stderr)
}

#[test]
fn catalog_json_converts_usd_prices() {
    let home = unique_temp_dir("catalog-usd");

    let (ok, stdout, stderr) = run_aitarif(&["catalog", "-j", "--currency", "usd"], &home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    let arr = json.as_array().expect("array output");

    // 150 000 KZT * 0.00211 = 316.5 -> charm-rounded 319.99
    let audit = arr.iter().find(|v| v["id"] == "ai-audit").expect("ai-audit");
    assert_eq!(audit["base_price"].as_i64(), Some(150_000));
    assert!((audit["display_price"].as_f64().unwrap() - 319.99).abs() < 1e-9);
    assert_eq!(audit["formatted"].as_str(), Some("319.99$"));

    // On-request entries carry no price in any currency
    let enterprise = arr
        .iter()
        .find(|v| v["id"] == "enterprise")
        .expect("enterprise");
    assert!(enterprise["display_price"].is_null());
    assert_eq!(enterprise["formatted"].as_str(), Some("on request"));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn catalog_json_default_currency_is_tenge() {
    let home = unique_temp_dir("catalog-kzt");

    let (ok, stdout, stderr) = run_aitarif(&["catalog", "-j"], &home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    let audit = json
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["id"] == "ai-audit")
        .expect("ai-audit");
    assert!((audit["display_price"].as_f64().unwrap() - 150_000.0).abs() < 1e-9);
    assert_eq!(audit["formatted"].as_str(), Some("150 000 ₸"));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn catalog_json_order_desc_puts_most_expensive_first() {
    let home = unique_temp_dir("catalog-desc");

    let (ok, stdout, stderr) = run_aitarif(&["catalog", "-j", "--order", "desc"], &home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    let arr = json.as_array().unwrap();
    assert_eq!(arr[0]["id"].as_str(), Some("automation"));
    // On-request entries stay last even in descending order
    assert!(arr.last().unwrap()["display_price"].is_null());

    let _ = fs::remove_dir_all(home);
}

#[test]
fn catalog_csv_outputs_correct_format() {
    let home = unique_temp_dir("catalog-csv");

    let (ok, stdout, stderr) = run_aitarif(&["catalog", "--csv", "--currency", "rub"], &home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let output = String::from_utf8(stdout).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "id,name,category,base_price,display_price");
    // 150 000 KZT * 0.19 = 28 500 -> charm-rounded 28 499
    let audit = lines
        .iter()
        .find(|l| l.starts_with("ai-audit,"))
        .expect("ai-audit row");
    assert!(audit.ends_with(",150000,28499"), "row: {audit}");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn catalog_search_filters_results() {
    let home = unique_temp_dir("catalog-search");

    let (ok, stdout, stderr) = run_aitarif(&["catalog", "-j", "--search", "chatbot"], &home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"].as_str(), Some("chatbot"));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn convert_prints_formatted_price() {
    let home = unique_temp_dir("convert-plain");

    let (ok, stdout, stderr) = run_aitarif(&["convert", "150000", "--currency", "usd"], &home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    assert_eq!(String::from_utf8(stdout).unwrap().trim(), "319.99$");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn convert_zero_is_on_request_in_every_currency() {
    let home = unique_temp_dir("convert-zero");

    for currency in ["kzt", "rub", "usd"] {
        let (ok, stdout, stderr) = run_aitarif(&["convert", "0", "--currency", currency], &home);
        assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
        assert_eq!(String::from_utf8(stdout).unwrap().trim(), "on request");
    }

    let _ = fs::remove_dir_all(home);
}

#[test]
fn convert_negative_amount_exits_with_error() {
    let home = unique_temp_dir("convert-negative");

    let (ok, _stdout, stderr) = run_aitarif(&["convert", "-150"], &home);
    assert!(!ok, "negative amounts should be rejected");
    let err = String::from_utf8_lossy(&stderr);
    assert!(err.contains("non-negative"), "stderr: {err}");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn calc_json_matches_rate_card() {
    let home = unique_temp_dir("calc-json");

    let (ok, stdout, stderr) = run_aitarif(
        &[
            "calc",
            "--provider",
            "gpt-4-turbo",
            "--input-tokens",
            "1000",
            "--output-tokens",
            "500",
            "--requests",
            "100",
            "-j",
            "--currency",
            "usd",
        ],
        &home,
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    // 0.01 * 1 + 0.03 * 0.5 = 0.025 per request; 100 requests -> 2.5/month
    assert!((json["per_request_usd"].as_f64().unwrap() - 0.025).abs() < 1e-12);
    assert!((json["monthly_usd"].as_f64().unwrap() - 2.5).abs() < 1e-12);
    // USD display currency: local equals USD
    assert!((json["monthly_local"].as_f64().unwrap() - 2.5).abs() < 1e-12);
    assert_eq!(json["usage"]["input_tokens"].as_i64(), Some(1000));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn calc_scenario_preset_overrides_usage() {
    let home = unique_temp_dir("calc-scenario");

    let (ok, stdout, stderr) = run_aitarif(
        &["calc", "--provider", "claude-sonnet", "--scenario", "chatbot", "-j"],
        &home,
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["usage"]["input_tokens"].as_i64(), Some(1500));
    assert_eq!(json["usage"]["output_tokens"].as_i64(), Some(400));
    assert_eq!(json["usage"]["requests_per_month"].as_i64(), Some(30000));
    // 1.5*0.003 + 0.4*0.015 = 0.0105 per request, 315/month; default currency KZT at 470
    assert!((json["monthly_usd"].as_f64().unwrap() - 315.0).abs() < 1e-9);
    assert!((json["monthly_local"].as_f64().unwrap() - 148_050.0).abs() < 1e-6);
    assert_eq!(json["currency"].as_str(), Some("KZT"));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn calc_scenario_with_explicit_tokens_fails() {
    let home = unique_temp_dir("calc-conflict");

    let (ok, _stdout, stderr) = run_aitarif(
        &[
            "calc",
            "--provider",
            "gpt-4o",
            "--scenario",
            "chatbot",
            "--input-tokens",
            "10",
        ],
        &home,
    );
    assert!(!ok, "scenario combined with explicit counts should fail");
    let err = String::from_utf8_lossy(&stderr);
    assert!(err.contains("cannot be combined"), "stderr: {err}");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn calc_unknown_provider_exits_with_error() {
    let home = unique_temp_dir("calc-unknown");

    let (ok, _stdout, stderr) = run_aitarif(&["calc", "--provider", "gpt-9"], &home);
    assert!(!ok, "unknown provider should fail");
    let err = String::from_utf8_lossy(&stderr);
    assert!(err.contains("Unknown provider"), "stderr: {err}");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn calc_negative_counts_are_treated_as_zero() {
    let home = unique_temp_dir("calc-negative");

    let (ok, stdout, stderr) = run_aitarif(
        &[
            "calc",
            "--provider",
            "gpt-4o",
            "--input-tokens",
            "-500",
            "--output-tokens",
            "-500",
            "--requests",
            "-1",
            "-j",
        ],
        &home,
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["usage"]["input_tokens"].as_i64(), Some(0));
    assert_eq!(json["monthly_usd"].as_f64(), Some(0.0));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn config_file_sets_display_currency() {
    let home = unique_temp_dir("config-currency");
    write_file(
        &home.join(".config/aitarif/config.toml"),
        "currency = \"usd\"\n",
    );

    let (ok, stdout, stderr) = run_aitarif(&["convert", "150000"], &home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    assert_eq!(String::from_utf8(stdout).unwrap().trim(), "319.99$");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn cli_currency_overrides_config_file() {
    let home = unique_temp_dir("config-override");
    write_file(
        &home.join(".config/aitarif/config.toml"),
        "currency = \"usd\"\n",
    );

    let (ok, stdout, stderr) = run_aitarif(&["convert", "150000", "--currency", "kzt"], &home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    assert_eq!(String::from_utf8(stdout).unwrap().trim(), "150 000 ₸");

    let _ = fs::remove_dir_all(home);
}

#[test]
fn providers_csv_lists_rate_card() {
    let home = unique_temp_dir("providers-csv");

    let (ok, stdout, stderr) = run_aitarif(&["providers", "--csv"], &home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let output = String::from_utf8(stdout).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "id,name,input_per_1k_usd,output_per_1k_usd");
    assert!(lines.iter().any(|l| l.starts_with("gpt-4-turbo,")));

    let _ = fs::remove_dir_all(home);
}

#[test]
fn scenarios_json_exposes_presets() {
    let home = unique_temp_dir("scenarios-json");

    let (ok, stdout, stderr) = run_aitarif(&["scenarios", "-j"], &home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    let arr = json.as_array().expect("array output");
    let chatbot = arr
        .iter()
        .find(|v| v["id"] == "chatbot")
        .expect("chatbot scenario");
    assert_eq!(chatbot["input_tokens"].as_i64(), Some(1500));
    assert_eq!(chatbot["requests_per_month"].as_i64(), Some(30000));

    let _ = fs::remove_dir_all(home);
}
