use std::fs;
use std::process;

use linecover::{find_cover, lines_to_json, matrix_from_json, min_line_cover, CostMatrix};

fn main() {
    env_logger::init();

    // With a path argument, behave as a pipeline stage: decode the JSON
    // grid, print the JSON line list, nothing else.
    if let Some(path) = std::env::args().nth(1) {
        if let Err(e) = run_file(&path) {
            eprintln!("linecover: {e}");
            process::exit(1);
        }
        return;
    }

    demo();
}

fn run_file(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let input = fs::read_to_string(path)?;
    let matrix: CostMatrix<i64> = matrix_from_json(&input)?;
    let lines = find_cover(&matrix);
    println!("{}", lines_to_json(&lines)?);
    Ok(())
}

fn demo() {
    println!("linecover: minimum line cover of matrix zeros");

    let grid = vec![
        vec![0, 0, 0, 2, 0],
        vec![4, 2, 0, 8, 2],
        vec![0, 1, 2, 1, 4],
        vec![0, 2, 0, 2, 2],
        vec![2, 0, 2, 0, 4],
    ];

    println!("\nInput grid:");
    for row in &grid {
        println!("  {:?}", row);
    }

    let lines = min_line_cover(grid).expect("demo grid is rectangular");

    println!("\nCovering lines:");
    for line in &lines {
        println!("  {:?} {}", line.kind, line.index);
    }
}
