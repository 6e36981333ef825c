//! Build script to embed the answer word list
//!
//! Reads `data/answers.txt` and generates a const array the dictionary draws
//! targets from.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const ANSWERS_PATH: &str = "data/answers.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let output_path = Path::new(&out_dir).join("answers.rs");

    let content = fs::read_to_string(ANSWERS_PATH)
        .unwrap_or_else(|e| panic!("Failed to read {ANSWERS_PATH}: {e}"));

    // Blank lines and comments are allowed in the data file
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {ANSWERS_PATH}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Candidate target words ({} words)", words.len()).unwrap();
    writeln!(output, "pub const ANSWERS: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{}\",", word.to_ascii_lowercase()).unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in ANSWERS").unwrap();
    writeln!(output, "pub const ANSWERS_COUNT: usize = {};", words.len()).unwrap();

    println!("cargo:rerun-if-changed={ANSWERS_PATH}");
}
