use std::env;
use std::fs;

use processor::{Processor, Report};
use scheduler::{Algorithm, Cylinder};

mod cli;

fn write_output(folder: &str, name: &str, output: &str) {
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(format!("../outputs/{folder}/{name}.log"), output).unwrap();
}

fn read_output(folder: &str, name: &str) -> String {
    fs::read_to_string(format!("../outputs/{folder}/{name}.log")).unwrap()
}

/// Compares `output` with the reference output of the test, or stores it as
/// the new reference when `WRITE_OUTPUT` is set.
fn run(folder: &str, name: &str, output: &str) {
    if env::var("WRITE_OUTPUT").is_ok() {
        write_output(folder, name, output);
    } else {
        let reference = read_output(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

/// Builds the input stream of a job.
fn job(cylinders: Cylinder, algorithm: Algorithm, requests: &[Cylinder]) -> String {
    let list = requests
        .iter()
        .map(|request| request.to_string())
        .collect::<Vec<String>>()
        .join(" ");
    format!(
        "{cylinders}\n{}\n{}\n{list}\n",
        algorithm.selector(),
        requests.len()
    )
}

/// Runs a job without prompts, returning the report and everything written.
fn simulate(head: i64, input: &str) -> (Report, String) {
    let mut output = Vec::new();
    let report = Processor::new(input.as_bytes(), &mut output)
        .prompt(false)
        .run(head)
        .unwrap();
    (report, String::from_utf8(output).unwrap())
}
