/*!
 * Integration tests for the batch pipeline: scanner, filter,
 * aggregator, and report wired together the way main.rs does it.
 */

use std::fs;

use tempfile::tempdir;

use treecat::aggregate::Aggregator;
use treecat::config::{Args, Config};
use treecat::report::ScanReport;
use treecat::scanner::Scanner;
use treecat::types::Node;

fn args_for(paths: Vec<String>, ext: Vec<String>, exclude: Vec<String>) -> Args {
    Args {
        paths,
        ext,
        exclude_dirs: exclude,
        clip: false,
        summary: false,
        generate: None,
    }
}

#[test]
fn test_batch_run_over_two_paths() {
    let dir_a = tempdir().unwrap();
    let dir_b = tempdir().unwrap();
    fs::write(dir_a.path().join("first.py"), "print('first')\n").unwrap();
    fs::write(dir_b.path().join("second.py"), "print('second')\n").unwrap();

    let config = Config::from_args(args_for(
        vec![
            dir_a.path().display().to_string(),
            dir_b.path().display().to_string(),
        ],
        vec![],
        vec![],
    ));

    let filter = config.filter();
    let aggregator = Aggregator::new();
    let qualifies = |node: &Node| !node.is_dir && filter.includes(&node.path);

    let mut out = Vec::new();
    let mut report = ScanReport::default();
    for path in &config.paths {
        let tree = Scanner::new(path).scan().unwrap();
        let stats = aggregator.run(&tree, &qualifies, &mut out).unwrap();
        report.absorb(stats);
    }

    let text = String::from_utf8(out).unwrap();
    assert_eq!(report.stats.files_emitted, 2);

    // Paths are processed sequentially in the order given
    let first_pos = text.find("first.py").unwrap();
    let second_pos = text.find("second.py").unwrap();
    assert!(first_pos < second_pos);
}

#[test]
fn test_batch_filter_and_exclude_flow() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir(temp_dir.path().join("src")).unwrap();
    fs::create_dir(temp_dir.path().join("testdata")).unwrap();
    fs::write(temp_dir.path().join("src").join("keep.go"), "package k\n").unwrap();
    fs::write(temp_dir.path().join("src").join("skip.md"), "# doc\n").unwrap();
    fs::write(
        temp_dir.path().join("testdata").join("drop.go"),
        "package d\n",
    )
    .unwrap();

    let config = Config::from_args(args_for(
        vec![temp_dir.path().display().to_string()],
        vec!["go".to_string()],
        vec!["test".to_string()],
    ));

    let filter = config.filter();
    let tree = Scanner::new(&config.paths[0]).scan().unwrap();

    let mut out = Vec::new();
    let stats = Aggregator::new()
        .run(&tree, |n: &Node| !n.is_dir && filter.includes(&n.path), &mut out)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(stats.files_emitted, 1);
    assert!(text.contains("keep.go"));
    assert!(!text.contains("skip.md"));
    // Excluded by the "test" directory token
    assert!(!text.contains("drop.go"));
}

#[test]
fn test_missing_path_does_not_stop_later_paths() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("ok.txt"), "fine\n").unwrap();

    let config = Config::from_args(args_for(
        vec![
            "/no/such/path".to_string(),
            temp_dir.path().display().to_string(),
        ],
        vec![],
        vec![],
    ));

    let mut out = Vec::new();
    let mut failed = false;
    for path in &config.paths {
        match Scanner::new(path).scan() {
            Ok(tree) => {
                Aggregator::new()
                    .run(&tree, |n: &Node| !n.is_dir, &mut out)
                    .unwrap();
            }
            Err(_) => failed = true,
        }
    }

    // The bad path is reported as a failure, the good one still runs
    assert!(failed);
    assert!(String::from_utf8(out).unwrap().contains("fine"));
}
