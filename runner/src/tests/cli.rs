use std::env;
use std::fs;
use std::path::PathBuf;

use clap::error::ErrorKind;

use std::process::ExitCode;

use crate::{cli, run, usage_exit};

#[test]
fn head_is_required() {
    let err = cli().try_get_matches_from(["disksched"]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert!(err.use_stderr());
}

#[test]
fn head_must_be_an_integer() {
    let err = cli()
        .try_get_matches_from(["disksched", "fifty"])
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ValueValidation);
    assert!(err.use_stderr());
}

#[test]
fn negative_head_reaches_validation() {
    let matches = cli()
        .try_get_matches_from(["disksched", "-3", "--no-prompt"])
        .unwrap();
    let head = *matches.get_one::<i64>("head").unwrap();

    assert_eq!(head, -3);
    assert_eq!(
        run(&matches).unwrap_err().to_string(),
        "Initial head position must be non-negative."
    );
}

#[test]
fn help_is_not_an_error() {
    let err = cli()
        .try_get_matches_from(["disksched", "--help"])
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert!(!err.use_stderr());
}

#[test]
fn usage_errors_exit_with_one() {
    let missing = cli().try_get_matches_from(["disksched"]).unwrap_err();
    let help = cli()
        .try_get_matches_from(["disksched", "--help"])
        .unwrap_err();

    assert_eq!(usage_exit(&missing), ExitCode::FAILURE);
    assert_eq!(usage_exit(&help), ExitCode::SUCCESS);
}

#[test]
fn options() {
    let matches = cli()
        .try_get_matches_from(["disksched", "7", "--no-prompt", "-vv", "--input", "job.txt"])
        .unwrap();

    assert_eq!(matches.get_one::<i64>("head"), Some(&7));
    assert!(matches.get_flag("no-prompt"));
    assert_eq!(matches.get_count("verbose"), 2);
    assert_eq!(
        matches.get_one::<PathBuf>("input"),
        Some(&PathBuf::from("job.txt"))
    );
}

#[test]
fn missing_input_file() {
    let matches = cli()
        .try_get_matches_from(["disksched", "1", "--input", "/nonexistent/disksched/job.txt"])
        .unwrap();

    let err = run(&matches).unwrap_err();
    assert!(format!("{err:#}").starts_with("cannot open /nonexistent/disksched/job.txt"));
}

#[test]
fn job_from_file() {
    let path = env::temp_dir().join(format!("disksched-job-{}.txt", std::process::id()));
    fs::write(&path, "100\n2\n2\n10 90\n").unwrap();

    let matches = cli()
        .try_get_matches_from([
            "disksched".into(),
            "50".into(),
            "--no-prompt".into(),
            "--input".into(),
            path.clone().into_os_string(),
        ])
        .unwrap();
    let result = run(&matches);
    fs::remove_file(&path).unwrap();

    assert!(result.is_ok());
}

#[test]
fn out_of_range_request_in_file() {
    let path = env::temp_dir().join(format!("disksched-range-{}.txt", std::process::id()));
    fs::write(&path, "10\n1\n3\n1 10 2\n").unwrap();

    let matches = cli()
        .try_get_matches_from([
            "disksched".into(),
            "5".into(),
            "--no-prompt".into(),
            "--input".into(),
            path.clone().into_os_string(),
        ])
        .unwrap();
    let result = run(&matches);
    fs::remove_file(&path).unwrap();

    assert_eq!(
        result.unwrap_err().to_string(),
        "Request 10 is out of range 0..9"
    );
}
