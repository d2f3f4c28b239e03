use std::process::Command;

#[test]
fn test_demo_prints_both_results() {
    let output = Command::new(env!("CARGO_BIN_EXE_sovran-setitem"))
        .output()
        .expect("failed to run the demo binary");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "dict:true\nd:'map[foo:bar]'\nlist:true\nl:'[1 bar]'\n"
    );
}

#[test]
fn test_demo_logs_nothing() {
    let output = Command::new(env!("CARGO_BIN_EXE_sovran-setitem"))
        .env("RUST_LOG", "trace")
        .output()
        .expect("failed to run the demo binary");

    // The subscriber has a fixed ceiling, so debug/trace events stay quiet
    // whatever the environment says.
    assert!(output.stderr.is_empty());
    assert_eq!(output.stdout.iter().filter(|&&b| b == b'\n').count(), 4);
}
