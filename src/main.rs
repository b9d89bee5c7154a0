use prepress::PrepressError;
use std::env;
use std::fs;

/// A simple CLI that runs the directive pipeline over one document.
fn main() -> Result<(), PrepressError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Prepares a prose-markup document for the downstream renderer.");
        eprintln!();
        eprintln!("Usage: {} <path/to/input.md> [path/to/output.md]", args[0]);
        eprintln!();
        eprintln!("With no output path the transformed text goes to stdout.");
        std::process::exit(1);
    }

    let input = fs::read_to_string(&args[1])?;
    let output = prepress::process(&input);

    match args.get(2) {
        Some(path) => {
            fs::write(path, output)?;
            eprintln!("Wrote {path}");
        }
        None => print!("{output}"),
    }
    Ok(())
}
