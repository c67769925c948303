mod analyze_cmd;
mod cli;
mod rows_cmd;
mod shared;
mod words_cmd;

use clap::Parser;
use cli::Cli;
use panelscan::AnalyzeOptions;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Analyze {
            ref files,
            kind,
            ref format,
            row_gap,
            max_sole_unit_len,
            noise_extent,
            plausible_only,
        } => {
            let mut options = AnalyzeOptions {
                max_sole_unit_len,
                noise_extent,
                ..AnalyzeOptions::default()
            };
            options.segment.row_gap = row_gap;
            analyze_cmd::run(files, kind, format, options, plausible_only)
        }
        cli::Commands::Rows {
            ref file,
            ref format,
            row_gap,
        } => rows_cmd::run(file, format, row_gap),
        cli::Commands::Words {
            ref file,
            ref format,
        } => words_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
