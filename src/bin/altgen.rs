//! Command-line interface for altgen
//! Extracts built-in identifiers from a module's introspection dump and
//! prints one optimized regex alternation per category.
//!
//! Usage:
//!   altgen [MODULE]...                 - Inspect modules via the interpreter (default: Swift)
//!   altgen --input `<path>` [MODULE]   - Read a saved introspection dump instead
//!   altgen --format json [MODULE]...   - Emit machine-readable sections

use altgen::report::Report;
use altgen::source;
use clap::{Arg, Command};

fn main() {
    let matches = Command::new("altgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates optimized regex alternations of built-in identifiers")
        .arg(
            Arg::new("module")
                .help("Modules to inspect (e.g. 'Swift', 'Foundation')")
                .num_args(0..)
                .default_value("Swift"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("PATH")
                .help("Read introspection output from a file instead of running the interpreter"),
        )
        .arg(
            Arg::new("interpreter")
                .long("interpreter")
                .value_name("BIN")
                .default_value("swift")
                .help("Interpreter binary asked for the ':type lookup' dump"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .default_value("text")
                .help("Output format ('text' or 'json')"),
        )
        .get_matches();

    let modules: Vec<String> = matches
        .get_many::<String>("module")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let input = matches.get_one::<String>("input");
    let interpreter = matches
        .get_one::<String>("interpreter")
        .expect("interpreter has a default");
    let format = matches.get_one::<String>("format").expect("format has a default");

    if format != "text" && format != "json" {
        eprintln!("Error: unknown format '{}' (expected 'text' or 'json')", format);
        std::process::exit(1);
    }
    if input.is_some() && modules.len() > 1 {
        eprintln!("Error: --input provides a single dump; pass at most one module with it");
        std::process::exit(1);
    }

    let reports: Vec<Report> = modules
        .iter()
        .map(|module| build_report(module, input, interpreter))
        .collect();

    match format.as_str() {
        "text" => {
            for report in &reports {
                print!("{}", report);
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(&reports).unwrap_or_else(|e| {
                eprintln!("Error serializing report: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        _ => unreachable!(),
    }
}

/// Obtain the introspection dump for one module and build its report.
fn build_report(module: &str, input: Option<&String>, interpreter: &str) -> Report {
    let contents = match input {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        }),
        None => source::type_lookup(interpreter, module).unwrap_or_else(|e| {
            eprintln!("Error inspecting module {}: {}", module, e);
            std::process::exit(1);
        }),
    };
    Report::from_introspection(module, &contents)
}
