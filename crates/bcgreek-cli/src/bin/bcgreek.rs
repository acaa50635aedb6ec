// bcgreek: convert beta code into polytonic Greek.
//
// Reads ASCII beta code from stdin, a file or a literal string and writes
// UTF-8 Greek text to stdout or a file. Malformed beta code is copied
// through unchanged; only unusable files or conflicting options are fatal.
//
// Usage:
//   bcgreek [-s] [-f INPUT_FILE] [-x STRING] [-o OUTPUT_FILE]

use std::io::Write;

use bcgreek_cli::InputSource;
use bcgreek_core::{Converter, Options};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if bcgreek_cli::wants_help(&args) {
        print_usage();
        return;
    }

    let config =
        bcgreek_cli::parse_args(&args).unwrap_or_else(|e| bcgreek_cli::fatal(&e.to_string()));

    let converter = Converter::new(Options {
        final_sigma: config.final_sigma,
    });

    let input =
        bcgreek_cli::open_input(&config.input).unwrap_or_else(|e| bcgreek_cli::fatal(&e.to_string()));
    let mut output = bcgreek_cli::open_output(&config.output)
        .unwrap_or_else(|e| bcgreek_cli::fatal(&e.to_string()));

    if let Err(e) = converter.convert(input, &mut output) {
        bcgreek_cli::fatal(&format!("conversion failed: {e}"));
    }

    // a literal string mirrors interactive use: terminate its output line
    if matches!(config.input, InputSource::Literal(_)) {
        if let Err(e) = writeln!(output) {
            bcgreek_cli::fatal(&format!("conversion failed: {e}"));
        }
    }
}

fn print_usage() {
    println!("bcgreek: convert beta code into polytonic Greek.");
    println!();
    println!("Usage: bcgreek [-s] [-f INPUT_FILE] [-x STRING] [-o OUTPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -s              automatically convert s into final sigma");
    println!("  -f INPUT_FILE   read beta code from INPUT_FILE (default: standard input)");
    println!("  -x STRING       convert STRING instead of reading a file");
    println!("  -o OUTPUT_FILE  write Greek text to OUTPUT_FILE (default: standard output)");
    println!("  -h, --help      print this help");
}
