//! Command-line interface for logica
//! Converts between symbolic propositional formulas and Portuguese sentences.
//!
//! Usage:
//!   logica parse `<formula>` [--format `<format>`] [--dict `<file>`]   - Parse and re-render a formula
//!   logica realize `<formula>` [--dict `<file>`]                     - Read a formula in Portuguese
//!   logica dictionary `<text>` [--format json|yaml]                  - Build a dictionary from a sentence
//!   logica translate `<text>` [--dict `<file>`] [--check]            - Translate a sentence to a formula
//!
//! Every subcommand accepts `--config <path>`; `logica.toml` in the working directory is
//! picked up when present. Set `RUST_LOG=logica=trace` to follow the pipeline.

use clap::{Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use logica::config::{DictionaryFormat, Loader, LogicaConfig};
use logica::logic::{
    build_dictionary_from_text, formula_to_string, parse_formula, realize_natural_language,
    to_treeviz_str, translate_text_to_formula, Dictionary, FormulaError, FormulaFormat,
};
use std::fmt;
use std::path::Path;

/// Errors surfaced by the command-line front end
#[derive(Debug)]
enum CliError {
    Formula(FormulaError),
    Io(std::io::Error),
    Config(ConfigError),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Formula(e) => write!(f, "Formula error: {}", e),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Yaml(e) => write!(f, "YAML error: {}", e),
            CliError::Usage(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<FormulaError> for CliError {
    fn from(err: FormulaError) -> Self {
        CliError::Formula(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Yaml(err)
    }
}

fn dict_arg() -> Arg {
    Arg::new("dict")
        .long("dict")
        .short('d')
        .help("Dictionary file (JSON, or YAML with a .yaml/.yml extension)")
}

fn cli() -> Command {
    Command::new("logica")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts between symbolic propositional logic and Portuguese sentences")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a formula and render it in the chosen format")
                .arg(
                    Arg::new("formula")
                        .help("Formula, e.g. 'p -> q' or '¬(A ∧ B)'")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: symbolic, natural, treeviz or json"),
                )
                .arg(dict_arg()),
        )
        .subcommand(
            Command::new("realize")
                .about("Read a formula as a Portuguese sentence")
                .arg(
                    Arg::new("formula")
                        .help("Formula to realize")
                        .required(true)
                        .index(1),
                )
                .arg(dict_arg()),
        )
        .subcommand(
            Command::new("dictionary")
                .about("Build a dictionary from the clauses of a sentence")
                .arg(
                    Arg::new("text")
                        .help("Sentence in Portuguese")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: json or yaml"),
                ),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate a sentence to symbolic notation")
                .arg(
                    Arg::new("text")
                        .help("Sentence in Portuguese")
                        .required(true)
                        .index(1),
                )
                .arg(dict_arg())
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Reparse the result and print its canonical form")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    env_logger::init();

    let matches = cli().get_matches();

    match run(&matches) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(matches: &ArgMatches) -> Result<String, CliError> {
    let config = load_config(matches)?;

    match matches.subcommand() {
        Some(("parse", sub)) => handle_parse_command(sub, &config),
        Some(("realize", sub)) => {
            let formula = parse_formula(required(sub, "formula")?)?;
            let dictionary = load_dictionary(sub.get_one::<String>("dict"), &config)?;
            Ok(realize_natural_language(&formula, &dictionary))
        }
        Some(("dictionary", sub)) => handle_dictionary_command(sub, &config),
        Some(("translate", sub)) => handle_translate_command(sub, &config),
        _ => Err(CliError::Usage("Unknown subcommand".to_string())),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, CliError> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("Missing argument <{}>", name)))
}

/// Defaults, then `logica.toml`, then `--config`, then `--format` flags
fn load_config(matches: &ArgMatches) -> Result<LogicaConfig, CliError> {
    let mut loader = Loader::new().with_optional_file("logica.toml");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    match matches.subcommand() {
        Some(("parse", sub)) => {
            if let Some(name) = sub.get_one::<String>("format") {
                let format = name.parse::<FormulaFormat>().map_err(CliError::Usage)?;
                loader = loader.set_override("output.format", format.to_string())?;
            }
        }
        Some(("dictionary", sub)) => {
            if let Some(name) = sub.get_one::<String>("format") {
                let format = parse_dictionary_format(name)?;
                loader = loader.set_override("output.dictionary_format", format)?;
            }
        }
        _ => {}
    }

    Ok(loader.build()?)
}

fn parse_dictionary_format(name: &str) -> Result<&'static str, CliError> {
    match name {
        "json" => Ok("json"),
        "yaml" => Ok("yaml"),
        other => Err(CliError::Usage(format!(
            "Unknown dictionary format '{}'. Available formats: json, yaml",
            other
        ))),
    }
}

/// Read the dictionary file, or fall back to the configured default dictionary
fn load_dictionary(path: Option<&String>, config: &LogicaConfig) -> Result<Dictionary, CliError> {
    let Some(path) = path else {
        return Ok(Dictionary::from(&config.dictionary));
    };

    let source = std::fs::read_to_string(path)?;
    let is_yaml = matches!(
        Path::new(path).extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        Ok(serde_yaml::from_str(&source)?)
    } else {
        Ok(serde_json::from_str(&source)?)
    }
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches, config: &LogicaConfig) -> Result<String, CliError> {
    let formula = parse_formula(required(matches, "formula")?)?;

    let output = match config.output.format {
        FormulaFormat::Symbolic => formula_to_string(&formula),
        FormulaFormat::Natural => {
            let dictionary = load_dictionary(matches.get_one::<String>("dict"), config)?;
            realize_natural_language(&formula, &dictionary)
        }
        FormulaFormat::Treeviz => {
            let dictionary = load_dictionary(matches.get_one::<String>("dict"), config)?;
            to_treeviz_str(&formula, Some(&dictionary))
                .trim_end()
                .to_string()
        }
        FormulaFormat::Json => serde_json::to_string_pretty(&formula)?,
    };
    Ok(output)
}

/// Handle the dictionary command
fn handle_dictionary_command(
    matches: &ArgMatches,
    config: &LogicaConfig,
) -> Result<String, CliError> {
    let dictionary = build_dictionary_from_text(required(matches, "text")?);

    match config.output.dictionary_format {
        DictionaryFormat::Json => Ok(serde_json::to_string_pretty(&dictionary)?),
        DictionaryFormat::Yaml => Ok(serde_yaml::to_string(&dictionary)?.trim_end().to_string()),
    }
}

/// Handle the translate command
fn handle_translate_command(
    matches: &ArgMatches,
    config: &LogicaConfig,
) -> Result<String, CliError> {
    let dictionary = load_dictionary(matches.get_one::<String>("dict"), config)?;
    let translated = translate_text_to_formula(required(matches, "text")?, &dictionary);

    if matches.get_flag("check") {
        let formula = parse_formula(&translated)?;
        Ok(formula_to_string(&formula))
    } else {
        Ok(translated)
    }
}
