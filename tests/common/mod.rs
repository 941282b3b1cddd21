use assert_cmd::Command;

pub fn chapters_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chapters").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
