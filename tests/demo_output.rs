use std::process::Command;

#[test]
fn test_binary_prints_summary_line() {
    let output = Command::new(env!("CARGO_BIN_EXE_lane_vectors"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lane_vectors");

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "6.000000 1.000000 1065353216\n"
    );
}

#[test]
fn test_logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_lane_vectors"))
        .env("RUST_LOG", "trace")
        .output()
        .expect("failed to run lane_vectors");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "6.000000 1.000000 1065353216\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("bit-cast"));
}
