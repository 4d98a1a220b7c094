// Command-line interface for marktree
//
// This binary converts Markdown into a document tree and prints it in one of the
// output formats of the marktree library (treeviz, tag, json).
//
// Usage:
//  marktree <input> [--to <format>] [--from markdown] [-o <file>]  - Convert (default)
//  marktree convert <input> [--to <format>] [--from markdown] [-o <file>]  - Same as above (explicit)
//  marktree --list-formats                - List available formats
//
// An input of "-" reads Markdown from stdin.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// Known keys (max-depth, pretty, show-formats, label-width) override the configuration,
// anything else is handed to the output format as is.
// Example:
//  marktree notes.md --to treeviz --extra-label-width 20

use clap::{Arg, ArgAction, Command, ValueHint};
use marktree::formats::MarkdownFormat;
use marktree::{Converter, FormatRegistry, ImportOptions};
use marktree_config::{Loader, MarktreeConfig};
use std::collections::HashMap;
use std::fs;
use std::io;
use tracing_subscriber::EnvFilter;

const STDIN_PATH: &str = "-";
const LOG_ENV: &str = "MARKTREE_LOG";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // The next arg is a value unless it is another flag or the end
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("marktree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown into a document tree")
        .long_about(
            "marktree converts Markdown into a structured document tree of headings,\n\
            quotes, code blocks, lists and paragraphs with formatted text and links,\n\
            and prints that tree in a chosen output format.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            marktree notes.md                          # Tree visualization\n  \
            marktree notes.md --to tag                 # XML-like tags\n  \
            marktree notes.md --to json -o tree.json   # JSON file\n  \
            cat notes.md | marktree - --to json        # Read from stdin",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a marktree.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Markdown file (default command)")
                .long_about(
                    "Convert Markdown into a document tree.\n\n\
                    Output formats:\n  \
                    - treeviz: tree visualization (default)\n  \
                    - tag:     XML-like tag format\n  \
                    - json:    JSON\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    marktree convert notes.md --to tag       # Tags on stdout\n  \
                    marktree convert - --to json < notes.md  # Read from stdin\n  \
                    marktree notes.md --to tag               # 'convert' is optional",
                )
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
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to convert.default_format)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a flag or known subcommand is an input path
            if cleaned_args.len() > 1 && should_inject_convert(&cleaned_args[1]) {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                eprintln!("Error: missing input path");
                std::process::exit(1);
            };
            let to = sub_matches
                .get_one::<String>("to")
                .cloned()
                .unwrap_or_else(|| config.convert.default_format.clone());
            let from = sub_matches
                .get_one::<String>("from")
                .cloned()
                .unwrap_or_else(|| detect_source_format(input));
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, &to, output, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn should_inject_convert(first: &str) -> bool {
    first == STDIN_PATH || (!first.starts_with('-') && first != "convert" && first != "help")
}

/// Install the stderr log subscriber. `--verbose` wins over `MARKTREE_LOG`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Ignore a second initialization
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Source format for `input`: its extension's format, else Markdown.
fn detect_source_format(input: &str) -> String {
    if input == STDIN_PATH {
        return "markdown".to_string();
    }
    let registry = FormatRegistry::default();
    registry
        .detect_format_from_filename(input)
        .filter(|name| {
            registry
                .get(name)
                .is_ok_and(|format| format.supports_parsing())
        })
        .unwrap_or_else(|| {
            tracing::debug!(input, "no parser for file extension, reading as markdown");
            "markdown".to_string()
        })
}

/// Registry whose Markdown parser uses the configured import options.
fn build_registry(config: &MarktreeConfig) -> FormatRegistry {
    let options = ImportOptions::from(&config.import);
    let mut registry = FormatRegistry::default();
    registry.register(MarkdownFormat::new(Converter::default().with_options(options)));
    registry
}

fn read_input(input: &str) -> io::Result<String> {
    if input == STDIN_PATH {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(input)
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MarktreeConfig,
) {
    let registry = build_registry(config);

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    tracing::debug!(from, to, bytes = source.len(), "converting");
    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    // Config first, --extra-* parameters win
    let mut format_options = config.convert.format_options(to);
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let mut text = registry
        .serialize_with_options(&doc, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "in/out",
            (true, false) => "in",
            (false, true) => "out",
            (false, false) => "-",
        };
        println!("  {name:<10} {direction:<7} {}", format.description());
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MarktreeConfig {
    let loader = Loader::new().with_optional_file("marktree.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(
    config: &mut MarktreeConfig,
    extra_params: &mut HashMap<String, String>,
) {
    if let Some(raw) = take_override(extra_params, &["max-depth", "max-inline-depth"]) {
        config.import.max_inline_depth = parse_usize_arg("max-depth", &raw);
    }
    if let Some(raw) = extra_params.remove("pretty") {
        config.convert.json.pretty = parse_bool_arg("pretty", &raw);
    }
    if let Some(raw) = extra_params.remove("show-formats") {
        config.convert.tag.show_formats = parse_bool_arg("show-formats", &raw);
    }
    if let Some(raw) = extra_params.remove("label-width") {
        config.convert.treeviz.label_width = parse_usize_arg("label-width", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_usize_arg(flag: &str, raw: &str) -> usize {
    raw.trim().parse().unwrap_or_else(|_| {
        eprintln!("Invalid number '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
