use std::io::{self, BufRead};

use sudoku_enumerate::Sudoku;

// Reads line format sudokus from stdin, one per line, and prints every
// solution of each in block format. Unsatisfiable puzzles print no answers.
fn main() -> io::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut q_no = 0;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let sudoku = match Sudoku::from_str_line(line) {
            Ok(sudoku) => sudoku,
            Err(err) => {
                eprintln!("skipping invalid sudoku: {}", err);
                continue;
            }
        };

        println!("{}", "=".repeat(80));
        println!("Question {}", q_no);
        println!("{}", "-".repeat(80));
        println!("{}", sudoku.display_block());
        println!();

        for (a_no, answer) in sudoku.solutions().enumerate() {
            println!("{}", "-".repeat(80));
            println!("Answer {}-{}", q_no, a_no);
            println!("{}", "-".repeat(80));
            println!("{}", answer.display_block());
            println!();
        }
        q_no += 1;
    }
    Ok(())
}
