use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

use csv_frame::Loader;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <file> [delimiter]", args[0]);
        ::std::process::exit(1);
    }

    let mut loader = Loader::new();
    if let Some(delimiter) = args.get(2) {
        loader.delimiter(delimiter.as_str());
    }

    match loader.load_path(&args[1]) {
        Ok(table) => {
            println!("{} rows x {} columns", table.rows(), table.cols());
            println!();
            if let Err(err) = table.write_aligned(io::stdout().lock()) {
                eprintln!("ERROR: {}", err);
                ::std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            ::std::process::exit(1);
        }
    }
}
