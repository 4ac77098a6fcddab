// Command-line interface for markdownconverter
//
// Converts markdown into another markup, chosen by format name. The formats come from the
// mdconv registry ("slack" and "http" out of the box).
//
// Usage:
//  markdownconverter [format] [input] [output]
//  markdownconverter -f slack -i notes.md -o notes.txt
//  markdownconverter --tree notes.md       - Print the parsed document tree as JSON
//  markdownconverter --tree slack notes.md - Same, the format is accepted and ignored
//  markdownconverter help | version
//
// Flags take precedence over positionals. Positionals fill whatever is still missing, in
// the order format, input, output. When no format is given at all the configured
// `convert.default_format` is used.
//
// Input that has a file extension is read from disk, "-" reads stdin, anything else is
// converted as literal markdown.

mod io;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdconv::{tree, ConvertError, ConverterRegistry};
use mdconv_config::{ConfigError, MdconvConfig};
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::io::{write_output, InputSource};

#[derive(Debug, Error)]
enum CliError {
    #[error("format undefined")]
    FormatUndefined,
    #[error("input undefined")]
    InputUndefined,
    #[error("failed to read input '{path}': {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write output '{path}': {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Format(ConvertError),
    #[error("failed to parse {0}")]
    Convert(ConvertError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to serialize document tree: {0}")]
    Tree(#[from] serde_json::Error),
}

fn build_cli() -> Command {
    Command::new("markdownconverter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown into other markup formats")
        .override_usage("markdownconverter [format] [input] [output]")
        .after_help(
            "Formats:\n  \
            slack   Slack chat-markup (mrkdwn)\n  \
            http    HTML fragment\n\n\
            Example:\n  \
            markdownconverter slack \"[evilmonkeyinc](https://github.com/evilmonkeyinc)\"\n  \
            <https://github.com/evilmonkeyinc|evilmonkeyinc>",
        )
        .arg(
            Arg::new("args")
                .help("Format, input and output, in that order")
                .num_args(0..=3)
                .value_name("ARGS"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("INPUT")
                .allow_hyphen_values(true)
                .help("Input file, markdown text, or - for stdin")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a markdownconverter.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("tree")
                .long("tree")
                .help("Print the document tree of the input as JSON instead of converting")
                .action(ArgAction::SetTrue),
        )
}

/// Format, input and output after merging flags with positionals.
#[derive(Debug, Default, PartialEq, Eq)]
struct Invocation {
    format: Option<String>,
    input: Option<String>,
    output: Option<String>,
}

impl Invocation {
    fn resolve(
        format: Option<&str>,
        input: Option<&str>,
        output: Option<&str>,
        positionals: &[String],
    ) -> Self {
        let mut rest = positionals.iter();
        Invocation {
            format: take(format, &mut rest),
            input: take(input, &mut rest),
            output: take(output, &mut rest),
        }
    }
}

/// The flag value if set, otherwise the next positional.
fn take(flag: Option<&str>, rest: &mut std::slice::Iter<'_, String>) -> Option<String> {
    match non_empty(flag) {
        Some(value) => Some(value.to_string()),
        None => rest.next().filter(|value| !value.is_empty()).cloned(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn version_line() -> String {
    format!(
        "version {} {}/{}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<MdconvConfig, ConfigError> {
    mdconv_config::load(".", explicit_path.map(Path::new))
}

/// Input for `--tree`. A lone positional is the input; with more, the first
/// names a format and is skipped, as in a normal conversion.
fn tree_input<'a>(input: Option<&'a str>, positionals: &'a [String]) -> Option<&'a str> {
    non_empty(input).or_else(|| {
        let index = usize::from(positionals.len() > 1);
        non_empty(positionals.get(index).map(String::as_str))
    })
}

fn init_logging(config: &MdconvConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    // Ignored when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_input(input: &str) -> Result<Vec<u8>, CliError> {
    InputSource::resolve(input)
        .read()
        .map_err(|source| CliError::ReadInput {
            path: input.to_string(),
            source,
        })
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let positionals: Vec<String> = matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    match positionals.first().map(String::as_str) {
        Some("help") => {
            print!("{}", build_cli().render_help());
            return Ok(());
        }
        Some("version") => {
            println!("{}", version_line());
            return Ok(());
        }
        _ => {}
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(String::as_str))?;
    init_logging(&config);

    let flag = |name: &str| matches.get_one::<String>(name).map(String::as_str);

    if matches.get_flag("tree") {
        let input = tree_input(flag("input"), &positionals).ok_or(CliError::InputUndefined)?;
        let document = tree::parse_bytes(&read_input(input)?).map_err(CliError::Convert)?;
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    let invocation = Invocation::resolve(flag("format"), flag("input"), flag("output"), &positionals);
    tracing::debug!(?invocation, "resolved invocation");

    let format = invocation
        .format
        .as_deref()
        .or_else(|| config.convert.default_format())
        .ok_or(CliError::FormatUndefined)?;

    let registry = ConverterRegistry::with_defaults();
    let converter = registry.get(format).map_err(CliError::Format)?;

    let input = invocation.input.as_deref().ok_or(CliError::InputUndefined)?;
    let source = read_input(input)?;

    let converted = converter
        .convert_bytes(&source)
        .map_err(CliError::Convert)?;

    let output = invocation.output.as_deref();
    write_output(output, &converted).map_err(|source| CliError::WriteOutput {
        path: output.unwrap_or("stdout").to_string(),
        source,
    })
}

fn main() {
    let matches = build_cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("failed: {err}");
        std::process::exit(1);
    }
}
