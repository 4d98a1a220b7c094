use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the output formats registered by marktree's FormatRegistry.
// Build scripts can't depend on the library crate they build alongside.
const OUTPUT_FORMATS: &[&str] = &["json", "tag", "treeviz"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("marktree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown into a document tree")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a marktree.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Markdown file (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format")
                        .value_parser(clap::builder::PossibleValuesParser::new(["markdown"])),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_parser(clap::builder::PossibleValuesParser::new(OUTPUT_FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "marktree", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "marktree", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "marktree", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
