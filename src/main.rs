use std::path::Path;
use std::process;

use sudoku_euler::{reformat_file, SOURCE_PATH, TARGET_PATH};

fn main() {
    if let Err(err) = reformat_file(Path::new(SOURCE_PATH), Path::new(TARGET_PATH)) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
