use assert_cmd::Command;

pub fn dayfold_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dayfold").unwrap();
    cmd.env_remove("DAYFOLD_ROOT");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Initialize a vault with the given entry root folder
#[allow(dead_code)]
pub fn init_vault(path: &std::path::Path, root: &str) {
    dayfold_cmd()
        .arg("init")
        .arg(path)
        .arg("--root")
        .arg(root)
        .assert()
        .success();
}

/// Create an entry folder and note directly on disk
#[allow(dead_code)]
pub fn make_entry(vault: &std::path::Path, root: &str, name: &str) {
    let folder = if root.is_empty() {
        vault.join(name)
    } else {
        vault.join(root).join(name)
    };
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::write(folder.join(format!("{}.md", name)), "note").unwrap();
}
