use assert_cmd::Command;
use std::path::Path;

pub fn mindtrack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mindtrack").unwrap();
    cmd.env_remove("MINDTRACK_ROOT");
    cmd.env_remove("MINDTRACK_LOG");
    cmd
}

/// Command running inside an initialized journal at `root`.
#[allow(dead_code)]
pub fn journal_cmd(root: &Path) -> Command {
    let mut cmd = mindtrack_cmd();
    cmd.current_dir(root);
    cmd
}

#[allow(dead_code)]
pub fn init_journal(root: &Path) {
    mindtrack_cmd().arg("init").arg(root).assert().success();
}

/// Add an entry and return the id printed by `add`.
#[allow(dead_code)]
pub fn add_entry(root: &Path, args: &[&str]) -> u64 {
    let output = journal_cmd(root).arg("add").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .split('#')
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|id| id.parse().ok())
        .unwrap_or_else(|| panic!("no id in add output: {stdout}"))
}
