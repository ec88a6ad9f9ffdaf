//! Common test utilities

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Get the path to the palettegen binary
pub fn palettegen_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("palettegen");
    path
}

/// Run palettegen with the given arguments, logging silenced
pub fn run_palettegen(args: &[&str]) -> Output {
    Command::new(palettegen_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute palettegen")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parsed `palettes.json` under `out_dir`
pub fn read_index(out_dir: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(out_dir.join("palettes.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

/// Parse the `--{role}-{key}: #hex;` lines of a CSS export
pub fn css_variables(css: &str) -> Vec<(String, String)> {
    css.lines()
        .filter_map(|line| {
            let line = line.trim();
            let rest = line.strip_prefix("--")?;
            let (name, value) = rest.split_once(": ")?;
            Some((name.to_string(), value.trim_end_matches(';').to_string()))
        })
        .collect()
}
