use anyhow::{Context, Result};
use markdown_nodes_config::Config;
use markdown_nodes_engine::{ParseLimits, Parser, RenderOptions, RenderTable, render};
use std::{env, fs, path::PathBuf, process};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Html,
    Tree,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    input: PathBuf,
    output: Output,
}

impl Args {
    /// Parses everything after the program name. `None` means print usage.
    fn parse(args: impl IntoIterator<Item = String>) -> Option<Self> {
        let mut output = Output::Html;
        let mut input = None;
        for arg in args {
            match arg.as_str() {
                "--tree" => output = Output::Tree,
                "--html" => output = Output::Html,
                "-h" | "--help" => return None,
                _ if arg.starts_with('-') => return None,
                _ if input.is_none() => input = Some(PathBuf::from(arg)),
                _ => return None,
            }
        }
        Some(Self {
            input: input?,
            output,
        })
    }
}

fn limits_from(config: &Config) -> ParseLimits {
    ParseLimits {
        max_input_bytes: config.max_input_bytes,
        max_line_bytes: config.max_line_bytes,
    }
}

fn render_options_from(config: &Config) -> RenderOptions {
    RenderOptions {
        image_width: config.image_width,
        image_height: config.image_height,
        default_image_alt: config.default_image_alt.clone(),
    }
}

fn run(args: &Args, config: &Config) -> Result<String> {
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let doc = Parser::new(limits_from(config))
        .parse(&content)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    log::info!(
        "parsed {} into {} block nodes",
        args.input.display(),
        doc.nodes.len()
    );

    Ok(match args.output {
        Output::Html => render(&doc.nodes, &RenderTable::html(), &render_options_from(config)),
        Output::Tree => format!("{:#?}", doc.nodes),
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "markdown-nodes".to_string());
    let Some(args) = Args::parse(env::args().skip(1)) else {
        eprintln!("Usage: {program_name} [--html|--tree] <file.md>");
        eprintln!("Settings are read from {}", Config::config_path().display());
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => {
            log::debug!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    match run(&args, &config) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
