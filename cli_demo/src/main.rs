extern crate serde_derive;
extern crate unistroke;

use serde_derive::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;
use unistroke::{Point, Recognizer, Stroke};

const ITERS: usize = 1_000;

#[derive(Serialize, Deserialize)]
struct Input {
    name: String,
    points: Vec<Vec<f64>>,
}

fn read_inputs(fname: &str) -> Vec<Input> {
    let mut res: Vec<Input> = Vec::new();
    let file = File::open(fname).expect("Failed to open file.");
    for line in BufReader::new(file).lines() {
        let line = line.expect("Line huh?");
        if line.is_empty() { continue; }
        let input: Input = serde_json::from_str(&line).unwrap();
        res.push(input);
    }
    return res;
}

fn get_stroke(points: &Vec<Vec<f64>>) -> Stroke {
    let mut res: Vec<Point> = Vec::with_capacity(points.len());
    for pt in points {
        let point = Point {
            x: pt[0],
            y: pt[1],
        };
        res.push(point);
    }
    return Stroke { points: res };
}

fn main() {
    env_logger::init();
    let fname = env::args().nth(1).unwrap_or_else(|| "debug/inputs.txt".to_string());
    println!("Loading evaluation data.");
    let inputs = read_inputs(&fname);
    println!("Loaded {} inputs; starting {} cycles of evaluation.", inputs.len(), ITERS);
    let mut recognizer = Recognizer::new();
    recognizer.load_templates().expect("Failed to load templates.");
    let start = Instant::now();
    let mut guessed = 0;
    for _ in 0..ITERS {
        for input in &inputs {
            let stroke = get_stroke(&input.points);
            let matches = recognizer.lookup(&stroke, 5).expect("Lookup failed.");
            if matches.len() > 0 && matches[0].name == input.name {
                guessed += 1;
            }
        }
    }
    let duration = start.elapsed();
    println!("Finished in {:?}. Correct guesses: {}.", duration, guessed);
}
