use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Read;
use tphoto_renamer_core::{app_paths, generate_plan, load_config, PlanOptions, RenamePlan};

#[derive(Debug, Parser)]
#[command(name = "tphoto-renamer-cli")]
#[command(about = "旅行写真のファイル名を都市別・撮影順で一括リネームします")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Rename(RenameArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    Show,
}

#[derive(Debug, Args)]
struct RenameArgs {
    #[arg(long)]
    input: Option<String>,
    #[arg(long, default_value_t = false)]
    allow_missing_extension: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Plain,
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rename(args) => cmd_rename(args),
        Commands::Config(config) => match config.action {
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

fn cmd_rename(args: RenameArgs) -> Result<()> {
    let raw = read_input(args.input.as_deref())?;
    let input = raw.strip_suffix('\n').unwrap_or(&raw);

    let config = load_config()?;
    let options = PlanOptions {
        allow_missing_extension: args.allow_missing_extension
            || config.allow_missing_extension_default,
    };

    let plan = generate_plan(input, &options)?;

    match args.output {
        OutputFormat::Plain => {
            let names: Vec<&str> = plan
                .candidates
                .iter()
                .map(|candidate| candidate.new_name.as_str())
                .collect();
            println!("{}", names.join("\n"));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        OutputFormat::Table => {
            print_table(&plan);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("入力ファイルを読めませんでした: {}", path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("標準入力を読めませんでした")?;
            Ok(buffer)
        }
    }
}

fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    let paths = app_paths()?;
    println!("設定ファイル: {}", paths.config_path.display());
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn print_table(plan: &RenamePlan) {
    println!("元ファイル -> 新ファイル (city, timestamp)");
    for candidate in &plan.candidates {
        println!(
            "{} -> {} ({}, {})",
            candidate.original_name, candidate.new_name, candidate.city, candidate.timestamp
        );
    }

    println!(
        "\n集計: records={} cities={} largest_group={} unchanged={}",
        plan.stats.records, plan.stats.cities, plan.stats.largest_group, plan.stats.unchanged
    );
}
