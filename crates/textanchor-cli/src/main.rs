mod anchors_cmd;
mod cli;
mod label_cmd;
mod lines_cmd;
mod query_cmd;
mod row_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Label {
            ref file,
            ref anchor,
            ref position,
            ref alignment,
            multiline,
            ref format,
        } => label_cmd::run(
            file,
            anchor,
            position.as_deref(),
            alignment.as_deref(),
            multiline,
            format,
        ),
        cli::Commands::Row {
            ref file,
            ref anchor,
            ref position,
            ref tiebreaker,
            ref format,
        } => row_cmd::run(file, anchor, position.as_deref(), tiebreaker.as_deref(), format),
        cli::Commands::Query {
            ref file,
            ref query,
            ref format,
        } => query_cmd::run(file, query, format),
        cli::Commands::Lines {
            ref file,
            ref pattern,
            ignore_case,
            no_regex,
            ref format,
        } => lines_cmd::run(file, pattern.as_deref(), ignore_case, no_regex, format),
        cli::Commands::Anchors { ref file, ref format } => anchors_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
