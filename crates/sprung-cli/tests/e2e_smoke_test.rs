use std::{fs, path::PathBuf};

use tempfile::tempdir;

use sprung_cli::{Args, run};

/// Collects all .edges files from a directory
fn collect_edge_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("edges")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Samples live at the workspace root, not in the crate
fn samples_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

fn args_for(input: &PathBuf, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        steps: Some(50),
        seed: Some(7),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_samples = collect_edge_files(samples_path());
    assert!(!valid_samples.is_empty(), "No valid samples found in samples/");

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let output_filename = format!(
            "{}.txt",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(sample_path, output_path.clone())) {
            Ok(()) => {
                let written = fs::read_to_string(&output_path).unwrap();
                let node_lines = written.lines().filter(|l| !l.starts_with('#')).count();
                let declared = written
                    .lines()
                    .find_map(|l| l.strip_prefix("# nodes "))
                    .and_then(|n| n.parse::<usize>().ok());
                assert_eq!(
                    declared,
                    Some(node_lines),
                    "{}: node lines do not match header",
                    sample_path.display()
                );
            }
            Err(e) => failed_samples.push((sample_path.clone(), e)),
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid sample(s) failed unexpectedly", failed_samples.len());
    }

    println!("✅ All {} valid samples passed", valid_samples.len());
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_samples = collect_edge_files(samples_path().join("errors"));
    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for sample_path in &error_samples {
        let output_filename = format!(
            "error_{}.txt",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(sample_path, output_path)).is_ok() {
            unexpectedly_succeeded.push(sample_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError samples that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error sample(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error samples failed as expected",
        error_samples.len()
    );
}

#[test]
fn e2e_same_seed_same_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let sample = samples_path().join("ring.edges");

    let first = temp_dir.path().join("first.txt");
    let second = temp_dir.path().join("second.txt");
    run(&args_for(&sample, first.clone())).unwrap();
    run(&args_for(&sample, second.clone())).unwrap();

    assert_eq!(
        fs::read_to_string(first).unwrap(),
        fs::read_to_string(second).unwrap()
    );
}
