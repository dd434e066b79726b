#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

/// Binary invocation isolated to `home`, offline and without scripted input.
pub fn cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ventureflow_cli").expect("binary builds");
    cmd.env("VENTUREFLOW_HOME", home)
        .env_remove("VENTUREFLOW_API_URL")
        .env_remove("VENTUREFLOW_TEST_INPUTS")
        .env("RUST_LOG", "off");
    cmd
}

/// Same as [`cli`] with prompts answered from `inputs`.
pub fn scripted(home: &Path, inputs: &[&str]) -> Command {
    let mut cmd = cli(home);
    cmd.env("VENTUREFLOW_TEST_INPUTS", shell_join(inputs));
    cmd
}

fn shell_join(inputs: &[&str]) -> String {
    inputs
        .iter()
        .map(|input| {
            if input.contains(char::is_whitespace) {
                format!("\"{input}\"")
            } else {
                input.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn status_json(home: &Path) -> serde_json::Value {
    let output = cli(home)
        .args(["status", "--json"])
        .output()
        .expect("status runs");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("status prints json")
}

pub fn sign_in(home: &Path) {
    cli(home)
        .args(["login", "Nimal Perera", "nimal@example.com"])
        .assert()
        .success();
}
