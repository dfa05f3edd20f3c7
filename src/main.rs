mod cli;

use clap::Parser;
use ibooks_highlights::export::{ExportAction, ExportOutcome, ExportRequest, run};
use ibooks_highlights::render::ReportFormat;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = execute(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "ibooks_highlights=debug"
    } else {
        "ibooks_highlights=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn execute(cli: cli::Cli) -> Result<(), Box<dyn std::error::Error>> {
    let action = if cli.list {
        ExportAction::List { json: cli.json }
    } else {
        let format = if cli.mindmap {
            ReportFormat::MindMap
        } else {
            ReportFormat::Html
        };
        ExportAction::Report {
            output: cli
                .output
                .unwrap_or_else(|| format.default_file_name().into()),
            format,
            book: cli.book,
            disable_toc: cli.notoc,
            disable_style_framework: cli.nobootstrap,
        }
    };

    let request = ExportRequest {
        annotations_dir: cli
            .annotations_dir
            .unwrap_or_else(cli::default_annotations_dir),
        library_dir: cli.library_dir.unwrap_or_else(cli::default_library_dir),
        action,
    };

    let mut stdout = std::io::stdout().lock();
    if let ExportOutcome::Written { path, books } = run(&request, &mut stdout)? {
        eprintln!("wrote {} book(s) to {}", books, path.display());
    }
    Ok(())
}
