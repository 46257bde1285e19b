use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

fn aeroheat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aeroheat"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("aeroheat-{}-{name}.json", std::process::id()));
    fs::write(&path, contents).expect("Failed to write config file");
    path
}

#[test]
fn report_defaults_to_the_recorded_flight() {
    let output = aeroheat(&["report"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = stdout(&output);
    assert!(stdout.contains("At 815.5 m altitude and 327.2 m/s:"), "{stdout}");
    assert!(stdout.contains("Temperature          = 282.85 K"), "{stdout}");
    assert!(stdout.contains("Air density          = 1.1297 kg/m³"), "{stdout}");
    assert!(stdout.contains("Dynamic viscosity    = 1.76e-5 kg/(m·s)"), "{stdout}");
    assert!(stdout.contains("Reynolds number      = 3194620.49"), "{stdout}");
    assert!(stdout.contains("Thermal conductivity = 0.0264 W/(m·K)"), "{stdout}");
    assert!(stdout.contains("Heat transfer coeff. = 91.61 W/(m²·K)"), "{stdout}");
    assert!(stdout.contains("Heat flux            = -17332.87 W/m²"), "{stdout}");
}

#[test]
fn report_as_json() {
    let output = aeroheat(&["report", "--format", "json"]);

    assert!(output.status.success(), "Command should succeed");
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

    let heat_flux = json["heat_flux"].as_f64().expect("heat_flux should be a number");
    assert!((heat_flux + 17_332.873_188_668_42).abs() < 1e-6, "{heat_flux}");
    assert_eq!(json["diameter"].as_f64(), Some(0.1525));
}

#[test]
fn report_with_custom_condition() {
    let output = aeroheat(&[
        "report",
        "--altitude",
        "0",
        "--velocity",
        "100",
        "--threshold-celsius",
        "15",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = stdout(&output);
    assert!(stdout.contains("Temperature          = 288.15 K"), "{stdout}");
    assert!(stdout.contains("Air density          = 1.2250 kg/m³"), "{stdout}");
    assert!(stdout.contains("Heat flux            = 0.00 W/m²"), "{stdout}");
}

#[test]
fn config_file_overrides_constants() {
    let path = temp_config("scale-height", r#"{ "scale_height": 8500.0 }"#);
    let output = aeroheat(&[
        "report",
        "--format",
        "json",
        "--config",
        path.to_str().unwrap(),
    ]);
    fs::remove_file(&path).ok();

    assert!(output.status.success(), "Command should succeed");
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    let density = json["air_density"].as_f64().unwrap();
    let expected = 1.225 * (-815.547_511_012_711_2_f64 / 8500.0).exp();
    assert!((density - expected).abs() < 1e-12, "{density}");
}

#[test]
fn invalid_config_fails() {
    let path = temp_config("bad-prandtl", r#"{ "prandtl_number": -1.0 }"#);
    let output = aeroheat(&["report", "--config", path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    assert!(!output.status.success(), "Command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid heating constants"), "{stderr}");
}

#[test]
fn missing_config_fails() {
    let output = aeroheat(&["report", "--config", "/nonexistent/aeroheat.json"]);
    assert!(!output.status.success(), "Command should fail");
}

#[test]
fn velocity_limit_recovers_flight_velocity() {
    let output = aeroheat(&["velocity-limit", "--flux", "17332.87318866842"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = stdout(&output);
    assert!(stdout.contains("is reached at 327.17 m/s"), "{stdout}");
    assert!(stdout.contains("Heat flux            = -17332.87 W/m²"), "{stdout}");
}

#[test]
fn velocity_limit_outside_bracket_fails() {
    let output = aeroheat(&["velocity-limit", "--flux", "17332.87", "--max", "100"]);
    assert!(!output.status.success(), "Command should fail");
}

#[test]
fn score_line() {
    let output = aeroheat(&["score", "--actual", "12321", "--target", "10000"]);

    assert!(output.status.success(), "Command should succeed");
    assert_eq!(
        stdout(&output).trim(),
        "Actual= 12321 ft, Target= 10000 ft -> 79.2 pts"
    );
}

#[test]
fn score_exact_and_far_misses() {
    let exact = aeroheat(&["score", "--actual", "10000", "--target", "10000"]);
    assert!(stdout(&exact).contains("-> 350.0 pts"));

    let far = aeroheat(&["score", "--actual", "5000", "--target", "10000"]);
    assert!(stdout(&far).contains("-> 0.0 pts"));
}

#[test]
fn recorded_map_lists_every_segment() {
    let output = aeroheat(&["map", "--recorded"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = stdout(&output);
    for name in [
        "NoseCone",
        "NoseConeTube",
        "PVTube",
        "LowerTransition",
        "FinCan",
        "Fins",
    ] {
        assert!(stdout.contains(name), "missing {name}: {stdout}");
    }
    assert!(stdout.contains("Total heat rate"), "{stdout}");
}

#[test]
fn modeled_map_as_json() {
    let output = aeroheat(&["map", "--format", "json"]);

    assert!(output.status.success(), "Command should succeed");
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

    let segments = json["segments"].as_array().expect("segments should be an array");
    assert_eq!(segments.len(), 11);
    assert_eq!(segments[0]["name"], "NoseCone");
    for segment in segments {
        let intensity = segment["intensity"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&intensity), "{segment}");
    }
}
