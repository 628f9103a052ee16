// iniline/src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use iniline::IniManager;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "iniline")]
#[command(about = "Inspect and edit INI files in place", long_about = None)]
#[command(version)]
struct Cli {
    /// INI file to operate on
    #[arg(short, long, value_name = "FILE", default_value = "config.ini", global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List section names ("" is the unnamed section)
    List,
    /// Print every key of a section
    Show { section: String },
    /// Print one value
    Get { section: String, key: String },
    /// Write a value, optionally with a comment line above it
    Set {
        section: String,
        key: String,
        value: String,
        #[arg(short, long, default_value = "")]
        comment: String,
    },
    /// Replace the comment above an existing key
    Comment {
        section: String,
        key: String,
        text: String,
    },
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut ini = IniManager::open(&cli.file)
        .with_context(|| format!("Error reading {}", cli.file.display()))?;

    match cli.command {
        Commands::List => {
            for name in ini.sections_list() {
                println!("[{}]", name);
            }
        }
        Commands::Show { section } => {
            if !ini.is_section_exists(&section) {
                anyhow::bail!("section [{}] not found in {}", section, cli.file.display());
            }
            for (key, value) in ini.section_map(&section) {
                println!("{}={}", key, value);
            }
        }
        Commands::Get { section, key } => {
            println!("{}", ini.value(&section, &key)?.as_str());
        }
        Commands::Set {
            section,
            key,
            value,
            comment,
        } => {
            let placement = ini
                .set(&section, &key, &value, &comment)
                .with_context(|| format!("Error writing {}", cli.file.display()))?;
            log::info!("[{}] {}: {:?}", section, key, placement);
        }
        Commands::Comment { section, key, text } => {
            ini.set_comment(&section, &key, &text)
                .with_context(|| format!("Error writing {}", cli.file.display()))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
