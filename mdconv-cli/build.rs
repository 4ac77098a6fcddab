use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the converter names registered by ConverterRegistry::with_defaults.
// Build scripts can't reach the library, so the list is duplicated here.
const AVAILABLE_FORMATS: &[&str] = &["slack", "http"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("markdownconverter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown into other markup formats")
        .arg(
            Arg::new("args")
                .help("Format, input and output, in that order")
                .num_args(0..=3)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS)),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Input file, markdown text, or - for stdin")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a markdownconverter.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("tree")
                .long("tree")
                .help("Print the document tree of the input as JSON instead of converting")
                .action(ArgAction::SetTrue),
        );

    generate_to(Bash, &mut cmd, "markdownconverter", &outdir)?;
    generate_to(Zsh, &mut cmd, "markdownconverter", &outdir)?;
    generate_to(Fish, &mut cmd, "markdownconverter", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
