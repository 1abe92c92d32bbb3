mod args;
mod error;
mod filter_expr;
mod load;
mod render;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use tabula_lib::Table;

use crate::args::Args;
use crate::error::CliError;

fn init_logging(args: &Args) -> Result<(), CliError> {
    match &args.log_file {
        Some(path) => {
            let log_file = File::create(path).map_err(|source| CliError::LogFile {
                path: path.clone(),
                source,
            })?;
            WriteLogger::init(args.log_level, Config::default(), log_file)?;
        }
        None => {
            TermLogger::init(
                args.log_level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<String, CliError> {
    let records = load::load_records(&args.input)?;
    info!("Loaded {} records from {}", records.len(), args.input.display());

    let columns = load::build_columns(&records, &args.columns);
    let mut table = Table::with_config(columns, args.table_config())
        .with_rows(records)
        .with_searchable_fields(args.search_fields.iter().cloned());

    for expr in &args.filters {
        let (field, criterion) = filter_expr::parse_filter(expr)?;
        debug!("Filter {} => {:?}", field, criterion);
        table.set_filter(&field, criterion);
    }
    if let Some(query) = &args.search {
        table.set_search_input(query.clone());
        table.apply_global_filter(query.clone());
    }
    if let Some(field) = &args.sort {
        table.set_sort(field);
        if args.desc {
            table.set_sort(field);
        }
    }
    table.set_page(args.page.saturating_sub(1));

    Ok(render::render(&table.view()))
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logging(&args) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
