// astlens: annotate C/C++ source with Clang AST node kinds

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use astlens::dump::{self, ParserCommand};
use astlens::render::RenderOptions;
use astlens::source;
use astlens::{annotate, AnnotateError, FilterProfile};

const AFTER_HELP: &str = "\
Filter options:
  minimal      - Show only the most important structural nodes
  clean        - Filter out common noise nodes (default)
  declarations - Show only declaration nodes
  statements   - Show only statement and control flow nodes
  all          - Show all AST nodes (very verbose)

Examples:
  astlens file.cpp
  astlens file.cpp --detailed
  astlens file.cpp --filter minimal --detailed
  astlens file.c --ast file.json";

#[derive(Parser, Debug)]
#[command(
    name = "astlens",
    version,
    about = "Annotate C/C++ source code with Clang AST information and plain-English explanations",
    after_help = AFTER_HELP
)]
struct Cli {
    /// C/C++ source file to annotate
    file: PathBuf,

    /// Filter level for AST nodes
    #[arg(long, value_enum, default_value_t = FilterProfile::Clean)]
    filter: FilterProfile,

    /// Maximum number of annotations per line
    #[arg(long, default_value_t = 5)]
    max_annotations: usize,

    /// Disable color coding of annotations
    #[arg(long)]
    no_colors: bool,

    /// Skip empty lines without annotations
    #[arg(long)]
    compact: bool,

    /// Show detailed explanations with context
    #[arg(long)]
    detailed: bool,

    /// Read a saved JSON AST dump instead of running clang
    #[arg(long, value_name = "PATH")]
    ast: Option<PathBuf>,

    /// Compiler used to produce the AST dump
    #[arg(long, env = "ASTLENS_CLANG", default_value = "clang")]
    clang: PathBuf,

    /// Seconds to wait for the compiler
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("astlens={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), AnnotateError> {
    let file_path = absolute(&cli.file);
    let source = source::read_source(&file_path)?;

    eprintln!("Processing: {}", file_path.display());
    eprintln!(
        "Filter: {}, Max annotations: {}",
        cli.filter, cli.max_annotations
    );

    let tree = match &cli.ast {
        Some(ast_path) => dump::load_document(ast_path)?,
        None => {
            let command = ParserCommand {
                program: cli.clang.clone(),
                timeout: Duration::from_secs(cli.timeout),
            };
            dump::run_parser(&file_path, &command)?
        }
    };
    debug!("AST dump loaded");

    let annotated = annotate(source, &tree, cli.filter, cli.detailed);

    if annotated.is_empty() {
        eprintln!("Warning: No AST annotations found");
    } else {
        eprintln!(
            "Found {} annotations on {} lines",
            annotated.tags.tag_count(),
            annotated.tags.line_count()
        );
    }

    let options = RenderOptions {
        max_annotations: cli.max_annotations,
        compact: cli.compact,
        use_colors: !cli.no_colors,
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    annotated.render(&mut out, &options)?;
    out.flush()?;
    Ok(())
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
