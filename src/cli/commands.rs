use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use crate::config::LoadOptions;
use crate::telemetry;
use crate::thread::{discover_thread_dirs, load_thread_dir};

#[derive(Parser)]
#[command(name = "messenger-history-parser")]
#[command(version = "0.1.0")]
#[command(about = "Load and validate chat-history export conversations", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble one conversation directory and print a summary
    Show {
        /// Directory holding message_<n>.json chunk files
        dir: PathBuf,
        /// Skip schema validation
        #[arg(long)]
        no_validate: bool,
    },
    /// Assemble and validate every conversation under an export directory
    Check {
        /// Export root to search for conversation directories
        root: PathBuf,
        /// Parse the chunks of each conversation in parallel
        #[arg(long)]
        parallel: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match &cli.command {
        Some(Commands::Show { dir, no_validate }) => {
            show_thread(dir, &LoadOptions::default().validate(!no_validate))?;
        }
        Some(Commands::Check { root, parallel }) => {
            check_export(root, &LoadOptions::default().parallel(*parallel))?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn show_thread(dir: &Path, options: &LoadOptions) -> Result<()> {
    let thread = load_thread_dir(dir, options)?;

    println!("Conversation: {}", thread.path_identifier());
    println!("================================");
    println!("Title: {}", thread.title.as_deref().unwrap_or("(untitled)"));
    println!("Participants: {}", thread.participant_names().collect::<Vec<_>>().join(", "));
    println!("Messages: {}", thread.messages.len());
    println!("With media: {}", thread.messages.iter().filter(|m| m.has_media()).count());

    if let Some(first) = thread.first_message_at() {
        println!("First message: {}", first.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(last) = thread.last_message_at() {
        println!("Last message: {}", last.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn check_export(root: &Path, options: &LoadOptions) -> Result<()> {
    let dirs = discover_thread_dirs(root)?;
    let mut failed = 0;
    let mut messages = 0;

    for dir in &dirs {
        match load_thread_dir(dir, options) {
            Ok(thread) => messages += thread.messages.len(),
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}: {:#}", dir.display(), e);
            }
        }
    }

    println!(
        "Checked {} conversations: {} valid, {} failed ({} messages)",
        dirs.len(),
        dirs.len() - failed,
        failed,
        messages
    );

    if failed > 0 {
        bail!("{} of {} conversations failed to load", failed, dirs.len());
    }

    Ok(())
}
