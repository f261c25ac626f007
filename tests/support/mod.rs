use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Small corpus in the layout of the Coursera export
pub const SAMPLE_CORPUS: &str = "\
course_name,course_provided_by,course_rating,course_url,skills
Python Basics,University A,4.7,https://example.org/python,\"['Python']\"
Python and SQL,University B,4.5,https://example.org/python-sql,\"['Python', 'SQL']\"
Java Fundamentals,University C,4.2,,\"['Java']\"
Cooking 101,Chef D,,,[]
";

/// Get a Command for skillrank
pub fn skillrank() -> Command {
    cargo_bin_cmd!("skillrank")
}

/// Write the sample corpus under `dir` with the default corpus file name
pub fn write_corpus(dir: &Path) {
    fs::write(dir.join("coursera-courses.csv"), SAMPLE_CORPUS).unwrap();
}

/// Create a temp dir holding an initialized store and the sample corpus
#[allow(dead_code)]
pub fn setup_store() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());
    skillrank()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// Parse stdout of a `--format json` run
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
