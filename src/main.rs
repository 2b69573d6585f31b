/*!
 * Command-line interface for treecat (batch mode)
 */

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use treecat::aggregate::Aggregator;
use treecat::clipboard;
use treecat::config::{Args, Config, MAX_FILE_SIZE};
use treecat::report::{ReportFormat, Reporter, ScanReport};
use treecat::scanner::Scanner;
use treecat::types::Node;

fn main() -> ExitCode {
    let args = Args::parse();

    // Generate shell completions and exit
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = Config::from_args(args);

    if config.paths.is_empty() {
        let mut cmd = Args::command();
        let _ = cmd.write_help(&mut io::stderr());
        eprintln!();
        return ExitCode::from(2);
    }

    let filter = config.filter();
    let aggregator = Aggregator::with_max_file_size(MAX_FILE_SIZE);
    let qualifies = |node: &Node| !node.is_dir && filter.includes(&node.path);

    let start_time = Instant::now();
    let mut report = ScanReport::default();
    let mut failed = false;

    // With --clip the output is buffered so it can be handed to the
    // clipboard after being written to stdout; otherwise blocks are
    // streamed as they are produced.
    let mut clip_buf: Vec<u8> = Vec::new();

    for path in &config.paths {
        let tree = match Scanner::new(path).scan() {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("Error processing {}: {}", path.display(), e);
                failed = true;
                continue;
            }
        };

        let run = if config.clip {
            aggregator.run(&tree, &qualifies, &mut clip_buf)
        } else {
            aggregator.run(&tree, &qualifies, &mut io::stdout().lock())
        };

        match run {
            Ok(stats) => report.absorb(stats),
            Err(e) => {
                eprintln!("Error writing output: {}", e);
                failed = true;
            }
        }
    }

    if config.clip {
        if io::stdout().lock().write_all(&clip_buf).is_err() {
            failed = true;
        }
        match clipboard::copy_to_clipboard(&String::from_utf8_lossy(&clip_buf)) {
            Ok(()) => eprintln!("Output copied to clipboard"),
            Err(e) => {
                eprintln!("Failed to copy to clipboard: {}", e);
                failed = true;
            }
        }
    }

    report.duration = start_time.elapsed();

    if config.summary {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        reporter.print_report(&report);
    }

    if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
