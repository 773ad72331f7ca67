// ===== wordrank/src/main.rs =====
use clap::Parser;
use std::path::PathBuf;
use std::process;
use wordrank::analyzer;

mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to analyze (read fully as UTF-8)
    file: PathBuf,

    /// How many of the most frequent words to report
    #[arg(short, long, default_value_t = analyzer::DEFAULT_TOP)]
    top: usize,

    /// Emit the result as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let stats = match analyzer::analyze_file(&cli.file, cli.top) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        reports::print_document_report(&stats);
    }
}
