use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use zgglex::grammar::{self, layout::DEFAULT_DIR, CheckOutcome, GrammarLayout};

#[derive(Parser)]
#[command(name = "zgglex")]
#[command(author, version, about = "The zgg lexer grammar generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args, Clone)]
struct LayoutArgs {
    /// Directory holding DefaultMode.g4, TemplateString.g4 and ZggLexer.g4
    #[arg(long, default_value = DEFAULT_DIR)]
    dir: PathBuf,
}

impl LayoutArgs {
    fn layout(&self) -> GrammarLayout {
        GrammarLayout::new(&self.dir)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ZggLexer.g4 (default)
    Generate(LayoutArgs),

    /// Verify that ZggLexer.g4 matches its inputs without writing it
    Check(LayoutArgs),

    /// List the default-mode tokens and their StrExpr actions
    Tokens {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let command = cli.command.unwrap_or(Commands::Generate(LayoutArgs {
        dir: PathBuf::from(DEFAULT_DIR),
    }));

    let result = match command {
        Commands::Generate(args) => generate(args.layout()),
        Commands::Check(args) => check(args.layout()),
        Commands::Tokens { layout, json } => tokens(layout.layout(), json),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn generate(layout: GrammarLayout) -> Result<()> {
    grammar::assemble_layout(&layout)
        .with_context(|| format!("Failed to generate {}", layout.output_path().display()))?;
    Ok(())
}

fn check(layout: GrammarLayout) -> Result<()> {
    let output = layout.output_path();
    match grammar::check(&layout).context("Failed to check generated grammar")? {
        CheckOutcome::UpToDate => {
            log::info!("{} is up to date", output.display());
            Ok(())
        }
        CheckOutcome::Stale => anyhow::bail!("{} is out of date; rerun `zgglex generate`", output.display()),
        CheckOutcome::Missing => anyhow::bail!("{} does not exist; run `zgglex generate`", output.display()),
    }
}

fn tokens(layout: GrammarLayout, json: bool) -> Result<()> {
    let path = layout.default_mode_path();
    let set = grammar::classify_file(&path)
        .with_context(|| format!("Failed to read tokens from {}", path.display()))?;
    let rules = set.derived_rules();

    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    println!("{}", "=== Tokens ===".blue().bold());
    let width = set.max_name_len();
    for (i, rule) in rules.iter().enumerate() {
        println!("{:4}: {:width$} -> {}", i, rule.name, rule.action, width = width);
    }
    Ok(())
}
