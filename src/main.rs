use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use jsonslice::{Extractor, Options};
use serde_json::Value;
use tracing::Level;

/// Slice a value out of a JSON document by path, without parsing the document.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path expression, e.g. `$.store.book[-1].title`
    path: String,
    /// JSON file to read; stdin when omitted or `-`
    file: Option<PathBuf>,
    /// Re-render the result as pretty-printed JSON (optional flag)
    #[arg(long)]
    pretty: bool,
    /// Print the compiled path instead of evaluating it (optional flag)
    #[arg(long)]
    explain: bool,
    /// Maximum number of path segments accepted
    #[arg(long, default_value_t = Options::default().max_segments)]
    max_segments: usize,
    /// Log verbosity, repeat for more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let extractor = Extractor::new(Options::default().with_max_segments(args.max_segments));

    // Compile the path first so grammar errors surface before any input is read.
    let path = match extractor.compile(&args.path) {
        Ok(p) => p,
        Err(e) => fail(&e),
    };
    if args.explain {
        match serde_json::to_string_pretty(&path) {
            Ok(s) => println!("{s}"),
            Err(e) => fail(&e),
        }
        return;
    }

    let input = match read_input(args.file.as_ref()) {
        Ok(bytes) => bytes,
        Err(e) => fail(&e),
    };

    let out = match path.get(&input) {
        Ok(out) => out,
        Err(e) => fail(&e),
    };

    // Fall back to the raw bytes when the slice is not standalone JSON.
    let rendered = if args.pretty {
        serde_json::from_slice::<Value>(&out)
            .and_then(|v| serde_json::to_vec_pretty(&v))
            .map(Into::into)
            .unwrap_or(out)
    } else {
        out
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout
        .write_all(&rendered)
        .and_then(|_| stdout.write_all(b"\n"))
    {
        fail(&e);
    }
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(f) if f.as_os_str() != "-" => std::fs::read(f),
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn fail(e: &dyn std::fmt::Display) -> ! {
    eprintln!("jsonslice: {e}");
    std::process::exit(1);
}
