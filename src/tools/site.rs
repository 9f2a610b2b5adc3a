use callprobe::cache::{CacheHelper, FileCacher};
use callprobe::error::IntrospectError;
use callprobe::expr::extract_expression_name;
use callprobe::location::parse_location;
use callprobe::stack::StackDump;
use clap::Parser;
use colored::Colorize;

/// Show what a debug call at a source location would print as its expression
#[derive(Parser, Debug)]
struct Cli {
    /// `path/to/file.rs:line[:col]`, backtrace `at` lines are accepted as-is
    locations: Vec<String>,

    /// Parse a whole backtrace dump and pick this line index of it
    #[arg(short, long, value_name = "FILE", requires = "depth")]
    dump: Option<std::path::PathBuf>,

    #[arg(long, value_name = "INDEX")]
    depth: Option<usize>,
}

fn show(
    files: &mut impl FileCacher,
    location: &callprobe::SourceLocation,
) -> Result<(), IntrospectError> {
    let line = files.get_line(location.file_path(), location.line_number())?;
    println!("===[ {} ]===", location.to_string().bright_magenta());
    println!("{line}");
    match extract_expression_name(&line) {
        Ok(name) => println!("{} {}", "expression:".yellow(), name),
        Err(e) => println!("{} {e}", "Warning".yellow()),
    }
    Ok(())
}

fn main() {
    let Cli {
        locations,
        dump,
        depth,
    } = Cli::parse();
    let mut files = CacheHelper::new();
    let mut failed = false;

    let mut requests = locations;
    if let (Some(dump), Some(depth)) = (dump, depth) {
        let text = match std::fs::read_to_string(&dump) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("[ERROR] reading {}: {e}", dump.display());
                std::process::exit(1);
            }
        };
        match StackDump::from_text(&text).frame(depth) {
            Ok(line) => requests.push(line.to_owned()),
            Err(e) => {
                eprintln!("[ERROR] {e}");
                failed = true;
            }
        }
    }

    for req in &requests {
        let shown = parse_location(req).and_then(|location| show(&mut files, &location));
        if let Err(e) = shown {
            eprintln!("[ERROR] {req}:\n  {e}");
            failed = true;
        }
    }
    if failed {
        std::process::exit(1);
    }
}
