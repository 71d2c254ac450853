// Command-line interface for gutenmark
//
// This binary converts blog Markdown (with the :::box / :::balloon decoration DSL) into
// editor blocks and back, and exposes the intermediate pipeline stages for debugging.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag.
// Usage:
//  gutenmark <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  gutenmark convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  gutenmark inspect <path> [<transform>]      - Execute a transform (defaults to "blocks-summary")
//  gutenmark --list-transforms                 - List available transforms
//
// Extra Parameters:
//
// Parameters can be passed using --extra-<parameter-name> <value>.
// Conversion settings (remove-empty-blocks, tables, strikethrough, autolink, tasklist,
// hard-breaks, pretty) override the loaded configuration; anything else is handed to the
// target format, which rejects parameters it does not know.
// Example:
//  gutenmark post.md --to json --extra-pretty false

use gutenmark_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use gutenmark_babel::{initialize_blocks, ConversionOptions, FormatRegistry};
use gutenmark_config::{GutenmarkConfig, Loader};
use std::collections::HashMap;
use std::fs;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

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
    Command::new("gutenmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert blog Markdown to editor blocks and back")
        .long_about(
            "gutenmark converts blog Markdown, including :::box and :::balloon decorations,\n\
            into editor blocks, and serializes blocks back to Markdown, JSON or WordPress\n\
            block markup.\n\n\
            Commands:\n  \
            - convert: Transform between formats (default)\n  \
            - inspect: View intermediate pipeline stages\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override conversion settings.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            gutenmark post.md --to gutenberg                # Block markup to stdout\n  \
            gutenmark post.md --to json -o post.json        # Blocks as JSON file\n  \
            gutenmark post.json --to markdown               # Back to Markdown\n  \
            gutenmark inspect post.md html-sanitized        # HTML after sanitizing",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a gutenmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the intermediate stages of a Markdown conversion")
                .long_about(
                    "View a Markdown file at different stages of the import pipeline.\n\n\
                    Transforms:\n  \
                    - placeholders-json: Captured :::box / :::balloon fences\n  \
                    - html-raw:          Rendered HTML before sanitizing\n  \
                    - html-sanitized:    Rendered HTML after sanitizing\n  \
                    - blocks-json:       Mapped blocks as JSON\n  \
                    - blocks-summary:    One line per block (default)\n\n\
                    Examples:\n  \
                    gutenmark inspect post.md                     # Block summary\n  \
                    gutenmark inspect post.md placeholders-json   # Extracted decorations",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'blocks-summary'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats (default command)")
                .long_about(
                    "Convert documents between formats.\n\n\
                    Supported formats:\n  \
                    - markdown:  Markdown with decorations (.md), input and output\n  \
                    - html:      HTML fragment in, standalone document out (.html)\n  \
                    - json:      Block list as JSON (.json), input and output\n  \
                    - gutenberg: WordPress block markup (.wp), output only\n\n\
                    The source format is auto-detected from the file extension.\n\
                    html and json (with --extra-envelope) output take --extra-title,\n\
                    --extra-description and --extra-keywords to override the metadata.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
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
                        .help("Target format (required)")
                        .required(true)
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
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A leading file path means the implicit convert subcommand
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !["inspect", "convert", "help"].contains(&cleaned_args[1].as_str())
            {
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

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    if initialize_blocks() {
        log::debug!("registered editor block types");
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                fail("path is required");
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            if !extra_params.is_empty() {
                let mut keys: Vec<&str> = extra_params.keys().map(String::as_str).collect();
                keys.sort_unstable();
                fail(&format!("inspect does not accept --extra-{}", keys.join(", --extra-")));
            }
            handle_inspect_command(path, transform, &config);
        }
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("input is required");
            };
            let Some(to) = sub_matches.get_one::<String>("to") else {
                fail("--to is required");
            };
            let registry = registry_from_config(&config);

            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output, &extra_params);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, config: &GutenmarkConfig) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let options = ConversionOptions::from(&config.convert);
    let output = transforms::execute_transform(&source, transform, &options).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let blocks = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    log::debug!("parsed {} block(s) from {from}", blocks.len());

    let mut text = registry
        .serialize_with_options(&blocks, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
    if !text.is_empty() && !text.ends_with('\n') {
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

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  placeholders  - :::box / :::balloon fences cut out of the Markdown");
    println!("  html          - comrak rendering, before (raw) and after (sanitized) cleanup");
    println!("  blocks        - Mapped editor blocks");
    println!("  meta          - Article metadata derived from the blocks\n");

    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }

    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        println!("  {format_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> GutenmarkConfig {
    let loader = Loader::new().with_optional_file("gutenmark.toml");
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

fn registry_from_config(config: &GutenmarkConfig) -> FormatRegistry {
    FormatRegistry::with_options(
        &ConversionOptions::from(&config.convert),
        config.convert.json.pretty,
    )
}

fn apply_config_overrides(config: &mut GutenmarkConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["remove-empty-blocks", "remove-empty"]) {
        config.convert.remove_empty_blocks = parse_bool_arg("remove-empty-blocks", &raw);
    }

    let markdown = &mut config.convert.markdown;
    if let Some(raw) = extra_params.remove("tables") {
        markdown.tables = parse_bool_arg("tables", &raw);
    }
    if let Some(raw) = extra_params.remove("strikethrough") {
        markdown.strikethrough = parse_bool_arg("strikethrough", &raw);
    }
    if let Some(raw) = extra_params.remove("autolink") {
        markdown.autolink = parse_bool_arg("autolink", &raw);
    }
    if let Some(raw) = extra_params.remove("tasklist") {
        markdown.tasklist = parse_bool_arg("tasklist", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["hard-breaks", "hardbreaks"]) {
        markdown.hard_breaks = parse_bool_arg("hard-breaks", &raw);
    }

    if let Some(raw) = extra_params.remove("pretty") {
        config.convert.json.pretty = parse_bool_arg("pretty", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => fail(&format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
