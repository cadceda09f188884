//! Vesper reindenter CLI
//!
//! Reads a Vesper source file, rewrites every line's indentation, and
//! prints the result to stdout.

use vesper_indent::CodeStyle;
use vesperind::{init_tracing, reindent};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("vesperind {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            run(&args[1..]);
        }
    }
}

fn run(args: &[String]) {
    let mut style = CodeStyle::default();
    let mut path: Option<&str> = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--indent=") {
            style.indent_size = parse_width(arg, value);
        } else if let Some(value) = arg.strip_prefix("--tab-size=") {
            style.tab_size = parse_width(arg, value);
        } else if arg == "--tabs" {
            style.expand_tabs = false;
        } else if arg.starts_with('-') {
            eprintln!("error: unknown option '{arg}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        } else if path.is_none() {
            path = Some(arg.as_str());
        } else {
            eprintln!("error: more than one input file");
            std::process::exit(1);
        }
    }

    let Some(path) = path else {
        eprintln!("error: missing file path");
        eprintln!("Usage: vesperind <file.vsp> [options]");
        std::process::exit(1);
    };

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            std::process::exit(1);
        }
    };

    print!("{}", reindent(&source, &style));
}

fn parse_width(arg: &str, value: &str) -> usize {
    match value.parse() {
        Ok(width) => width,
        Err(_) => {
            eprintln!("error: '{arg}' needs a non-negative integer");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Vesper reindenter");
    println!();
    println!("Usage: vesperind <file.vsp> [options]");
    println!();
    println!("Options:");
    println!("  --indent=<n>     Columns per indent level (default: 4)");
    println!("  --tabs           Emit tabs instead of spaces");
    println!("  --tab-size=<n>   Columns per tab stop (default: 4)");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Examples:");
    println!("  vesperind main.vsp");
    println!("  vesperind main.vsp --indent=2");
    println!("  vesperind main.vsp --tabs --tab-size=8");
    println!();
    println!("The reindented source is written to stdout.");
}
