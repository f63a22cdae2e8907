use assert_cmd::Command;
use std::path::Path;

pub fn kahawat_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kahawat").unwrap();
    cmd.current_dir(dir);
    cmd.env_remove("KAHAWAT_FILE");
    cmd.env_remove("RUST_LOG");
    cmd
}
