// bcgreek-cli: argument parsing and stream setup for the bcgreek binary.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process;

/// Errors that can occur while setting up a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("the -f and -x options cannot be used together")]
    ConflictingInputs,
    #[error("option {0} requires a value")]
    MissingValue(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("cannot read from file {path}: {source}")]
    InputOpen { path: String, source: io::Error },
    #[error("cannot write to file {path}: {source}")]
    OutputOpen { path: String, source: io::Error },
}

/// Where the beta code comes from. Exactly one source per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(String),
    Literal(String),
}

/// Where the Greek text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(String),
}

/// Parsed command line for the bcgreek tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub final_sigma: bool,
    pub input: InputSource,
    pub output: OutputSink,
}

/// Parse the argument list (without the program name).
pub fn parse_args(args: &[String]) -> Result<RunConfig, CliError> {
    let mut final_sigma = false;
    let mut input_file: Option<String> = None;
    let mut literal: Option<String> = None;
    let mut output_file: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-s" => final_sigma = true,
            "-f" | "-x" | "-o" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::MissingValue(arg.clone()))?
                    .clone();
                match arg.as_str() {
                    "-f" => input_file = Some(value),
                    "-x" => literal = Some(value),
                    _ => output_file = Some(value),
                }
            }
            other => return Err(CliError::UnexpectedArgument(other.to_string())),
        }
    }

    if input_file.is_some() && literal.is_some() {
        return Err(CliError::ConflictingInputs);
    }

    let input = match (input_file, literal) {
        (Some(path), None) => InputSource::File(path),
        (None, Some(text)) => InputSource::Literal(text),
        _ => InputSource::Stdin,
    };
    let output = match output_file {
        Some(path) => OutputSink::File(path),
        None => OutputSink::Stdout,
    };

    Ok(RunConfig {
        final_sigma,
        input,
        output,
    })
}

/// Open the requested input source as a byte stream.
pub fn open_input(source: &InputSource) -> Result<Box<dyn Read>, CliError> {
    match source {
        InputSource::Stdin => Ok(Box::new(io::stdin())),
        InputSource::File(path) => File::open(path)
            .map(|f| Box::new(BufReader::new(f)) as Box<dyn Read>)
            .map_err(|source| CliError::InputOpen {
                path: path.clone(),
                source,
            }),
        InputSource::Literal(text) => Ok(Box::new(io::Cursor::new(text.clone().into_bytes()))),
    }
}

/// Open the requested output destination.
pub fn open_output(sink: &OutputSink) -> Result<Box<dyn Write>, CliError> {
    match sink {
        OutputSink::Stdout => Ok(Box::new(io::stdout())),
        OutputSink::File(path) => File::create(path)
            .map(|f| Box::new(BufWriter::new(f)) as Box<dyn Write>)
            .map_err(|source| CliError::OutputOpen {
                path: path.clone(),
                source,
            }),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_stdin_and_stdout() {
        let config = parse_args(&[]).unwrap();
        assert_eq!(
            config,
            RunConfig {
                final_sigma: false,
                input: InputSource::Stdin,
                output: OutputSink::Stdout,
            }
        );
    }

    #[test]
    fn all_options() {
        let config = parse_args(&args(&["-s", "-f", "in.txt", "-o", "out.txt"])).unwrap();
        assert!(config.final_sigma);
        assert_eq!(config.input, InputSource::File("in.txt".into()));
        assert_eq!(config.output, OutputSink::File("out.txt".into()));
    }

    #[test]
    fn literal_input() {
        let config = parse_args(&args(&["-x", "lo/gos"])).unwrap();
        assert_eq!(config.input, InputSource::Literal("lo/gos".into()));
    }

    #[test]
    fn file_and_literal_conflict() {
        let err = parse_args(&args(&["-f", "in.txt", "-x", "abc"])).unwrap_err();
        assert!(matches!(err, CliError::ConflictingInputs));
    }

    #[test]
    fn missing_value() {
        let err = parse_args(&args(&["-f"])).unwrap_err();
        assert!(matches!(err, CliError::MissingValue(_)));
    }

    #[test]
    fn stray_argument_is_rejected() {
        let err = parse_args(&args(&["extra"])).unwrap_err();
        assert!(matches!(err, CliError::UnexpectedArgument(_)));
    }

    #[test]
    fn literal_source_opens_as_a_stream() {
        let source = InputSource::Literal("abg".into());
        let mut text = String::new();
        open_input(&source)
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "abg");
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&args(&["-h"])));
        assert!(wants_help(&args(&["-s", "--help"])));
        assert!(!wants_help(&args(&["-s"])));
    }
}
