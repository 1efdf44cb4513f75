mod cli;

use relinfo::{config, parse_batch, report};

use anyhow::{Context, Result};
use clap::Parser as _;
use cli::{Cli, Commands};
use std::io::{self, BufRead};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag.
    // Logs go to stderr so stdout stays machine-readable.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "relinfo=debug,relinfo_parser=trace".to_string()
        } else {
            "relinfo=info,relinfo_parser=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Parse {
            titles,
            json,
            current_year,
        } => parse_titles(titles, json, current_year, cli.config.as_deref()),
        Commands::Rules => print_rules(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("relinfo {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn parse_titles(
    titles: Vec<String>,
    json: bool,
    current_year: Option<i32>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    if let Some(year) = current_year {
        config::validate_current_year(year).context("Invalid --current-year")?;
        config.parser.current_year = Some(year);
    }
    let parser = config
        .build_parser()
        .context("Failed to compile vocabulary")?;

    let titles = if titles.is_empty() {
        read_stdin_titles()?
    } else {
        titles
    };
    tracing::debug!("Parsing {} titles", titles.len());

    let results = parse_batch(&parser, &titles);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        let blocks: Vec<String> = results.iter().map(report::render).collect();
        print!("{}", blocks.join("\n"));
    }

    Ok(())
}

fn read_stdin_titles() -> Result<Vec<String>> {
    let mut titles = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read titles from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            titles.push(line.to_string());
        }
    }
    Ok(titles)
}

fn print_rules(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let table = config
        .rule_table()
        .context("Failed to compile vocabulary")?;

    #[derive(serde::Serialize)]
    struct Dump<'a> {
        vocabulary: &'a relinfo_parser::RuleSet,
    }

    let text = toml::to_string_pretty(&Dump {
        vocabulary: table.rule_set(),
    })?;
    print!("{}", text);
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let (config, source) = match path {
        Some(p) => (config::load_config(p)?, format!("{:?}", p)),
        None => match config::find_default_config() {
            Some(p) => (config::load_config(&p)?, format!("{:?}", p)),
            None => (config::Config::default(), "defaults".to_string()),
        },
    };

    let table = config.rule_table()?;
    let rules = table.rule_set();

    println!("✓ Configuration is valid ({})", source);
    match config.parser.current_year {
        Some(year) => println!("  Current year: {}", year),
        None => println!("  Current year: system clock"),
    }
    println!("  Max input length: {}", config.parser.max_input_length);
    println!("  Vocabulary entries: {}", rules.len());
    println!("    Added by config: {}", config.vocabulary.len());
    println!("    Known groups: {}", rules.known_groups.len());
    println!("    Repost suffixes: {}", rules.repost_suffixes.len());
    println!("    Editions: {}", rules.editions.len());

    Ok(())
}
