mod types;
mod unifier;
mod user_interaction;

use crate::unifier::Unifier;
use clap::{ArgAction, Parser};
use common::console::Console;
use common::rules::server_rules;
use common::settings::settings_root;
use common::types::{ConfigFiles, Opts};
use std::io::{self, BufRead, Write};
use std::process::exit;
use time::OffsetDateTime;

#[derive(Parser)]
#[clap(
    version,
    about = "Copies Monsters and Memories UI settings from one character to others"
)]
struct Cli {
    /// Settings directory to work on, instead of the game's usual one
    #[clap(short, long)]
    root: Option<String>,
    /// Do not copy windows.json
    #[clap(short = 'W', long, action = ArgAction::SetTrue)]
    no_windows: bool,
    /// Do not copy chats.json
    #[clap(short = 'C', long, action = ArgAction::SetTrue)]
    no_chats: bool,
    /// Comma-separated list of server directories to hide. Accepts * as a wildcard.
    #[clap(short, long)]
    omit: Option<String>,
    /// Do not check the directory size or offer a backup on startup
    #[clap(short = 'B', long)]
    skip_backup_check: bool,
    /// Print what would happen, without doing it
    #[clap(short, long)]
    noop: bool,
    /// Be verbose
    #[clap(short, long)]
    verbose: bool,
}

fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let root = match settings_root(cli.root.as_deref()) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(2);
        }
    };

    if !root.is_dir() {
        eprintln!("ERROR: {} is not a directory", root);
        exit(2);
    }

    log::info!("settings root is {}", root);

    let files = ConfigFiles {
        windows: !cli.no_windows,
        chats: !cli.no_chats,
    };

    let opts = Opts {
        verbose: cli.verbose,
        noop: cli.noop,
    };

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut unifier = Unifier::new(
        &root,
        server_rules(cli.omit.as_deref()),
        files,
        opts,
        console,
        local_now,
    );

    if let Err(e) = session(&mut unifier, cli.skip_backup_check) {
        eprintln!("ERROR: lost the terminal: {}", e);
        exit(1);
    }
}

fn session<R: BufRead, W: Write>(
    unifier: &mut Unifier<R, W>,
    skip_backup_check: bool,
) -> io::Result<()> {
    if !skip_backup_check {
        unifier.startup_check()?;
    }

    unifier.rescan()?;
    unifier.run()
}
