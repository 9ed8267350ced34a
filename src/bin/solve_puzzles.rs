use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process;
use std::time::Instant;

use sudoku_euler::{FileAccessError, Sudoku, TARGET_PATH};

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let path = Path::new(TARGET_PATH);
    let file = File::open(path).map_err(|err| FileAccessError::read(path, err))?;
    let reader = BufReader::new(file);

    for (num, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| FileAccessError::read(path, err))?;
        let sudoku = Sudoku::from_str_line(&line)
            .map_err(|err| format!("puzzle {}: {}", num + 1, err))?;

        let started = Instant::now();
        match sudoku.solve_one() {
            Some(solution) => {
                println!("Solved puzzle {} in {:?}", num + 1, started.elapsed());
                println!("{}", solution);
            }
            None => return Err(format!("puzzle {} has no solution", num + 1).into()),
        }
    }
    Ok(())
}
