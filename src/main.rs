use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "diff-to-html", version)]
#[command(about = "Render a unified diff as a side-by-side HTML page")]
struct Cli {
    /// Unified diff to read (e.g. the output of `git diff`)
    diff_file: PathBuf,

    /// HTML file to write
    output_html: PathBuf,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match diff_to_html::convert_file(&cli.diff_file, &cli.output_html) {
        Ok(_) => {
            println!("Wrote HTML diff to {}", cli.output_html.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
