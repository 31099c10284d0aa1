use std::error::Error;
use std::io::Write;

use log::info;
use rowloop::ReaderHandle;
use rowloop::cli::{CliArgs, SeparatorArg, drive};
use sarge::ArgumentType;
use sarge::prelude::*;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  rowloop (--file <path> | --config <path>) [--separator <sep>] [--count <n>] [--workers <n>]"
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -f, --file <path>       Data file, one record per line");
    eprintln!("  -c, --config <path>     Reader config (.json, .yaml, .toml)");
    eprintln!("  -s, --separator <sep>   Field separator (default ','; also tab, pipe, '\\t', ...)");
    eprintln!("  -n, --count <n>         Rows to draw in total (default 10)");
    eprintln!("  -w, --workers <n>       Concurrent workers sharing the file (default 1)");
}

fn get_or<T: ArgumentType>(
    value: Option<Result<T, T::Error>>,
    default: T,
) -> Result<T, Box<dyn Error>>
where
    T::Error: Error + 'static,
{
    match value {
        Some(Ok(v)) => Ok(v),
        Some(Err(e)) => Err(Box::new(e)),
        None => Ok(default),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let file_ref = reader.add::<String>(tag::both('f', "file"));
    let config_ref = reader.add::<String>(tag::both('c', "config"));
    let sep_ref = reader.add::<SeparatorArg>(tag::both('s', "separator"));
    let count_ref = reader.add::<usize>(tag::both('n', "count"));
    let workers_ref = reader.add::<usize>(tag::both('w', "workers"));

    let args = reader.parse()?;

    let defaults = CliArgs::default();
    let cli = CliArgs {
        file: file_ref.get(&args).and_then(Result::ok),
        config: config_ref.get(&args).and_then(Result::ok),
        separator: sep_ref.get(&args).and_then(Result::ok),
        count: get_or(count_ref.get(&args), defaults.count)?,
        workers: get_or(workers_ref.get(&args), defaults.workers)?,
    };

    let config = cli.reader_config()?;
    let handle = ReaderHandle::from_config(&config)?;

    let stdout = std::io::stdout();
    let drawn = drive(
        &handle,
        &config.separator,
        cli.count,
        cli.workers,
        |worker, row| {
            let mut out = stdout.lock();
            writeln!(out, "{worker}\t{}", row.join("\t"))
        },
    )?;

    info!(
        "drew {} row(s) from '{}' with {} worker(s), {} wraparound(s)",
        drawn,
        handle.reader().id(),
        cli.workers,
        handle.reader().rewinds()
    );
    handle.close()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        eprintln!("rowloop error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
