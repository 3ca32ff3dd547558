use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use common::backup::{BackupManager, BackupStatus};
use common::console::Console;
use common::errors::UnifyError;
use common::settings::settings_root;
use common::types::Opts;
use common::usage;
use std::io::{self, BufRead, Write};
use std::process::exit;
use time::OffsetDateTime;

#[derive(Parser)]
#[clap(
    version,
    about = "Backs up the Monsters and Memories settings directory",
    long_about = None
)]
struct Cli {
    /// Settings directory to back up, instead of the game's usual one
    #[clap(short, long)]
    root: Option<String>,
    /// Take a backup even if the latest one is recent
    #[clap(short, long)]
    force: bool,
    /// Don't ask for confirmation
    #[clap(short, long)]
    yes: bool,
    /// Only report on the latest backup. Exits 1 if it is stale.
    #[clap(short, long)]
    check: bool,
    /// Print what would happen, without doing it
    #[clap(short, long)]
    noop: bool,
    /// Be verbose
    #[clap(short, long)]
    verbose: bool,
}

fn describe_status(status: &BackupStatus) -> String {
    match status.latest {
        Some(date) => format!("Latest backup: {}{}", date, status.age_label()),
        None => "No backups found".to_string(),
    }
}

/// Takes a backup if one is due, or if forced. Returns the new backup's path, or None if there
/// was nothing to do or the user said no.
///
fn do_the_backup<R: BufRead, W: Write>(
    manager: &BackupManager,
    cli: &Cli,
    now: OffsetDateTime,
    console: &mut Console<R, W>,
) -> anyhow::Result<Option<Utf8PathBuf>> {
    let status = manager.status(now)?;

    if !status.is_stale() && !cli.force {
        console.say(&format!("{}. Nothing to do.", describe_status(&status)))?;
        return Ok(None);
    }

    let size = usage::directory_size(manager.settings_root())?;
    let size_str = usage::format_size(size);
    let target = manager.backup_path(now)?;

    if usage::is_unusually_large(size) {
        log::warn!("{} holds {} bytes", manager.settings_root(), size);
        console.warn(&format!(
            "Directory is {}. This is not normal. A log file is most likely the culprit.",
            size_str
        ))?;

        if !cli.yes && !console.confirm(&format!("Create backup at:\n{}", target))? {
            return Ok(None);
        }
    }

    if !cli.yes
        && !console.confirm(&format!(
            "Size: {}\n\nCreate backup at:\n{}",
            size_str, target
        ))?
    {
        return Ok(None);
    }

    let opts = Opts {
        verbose: cli.verbose,
        noop: cli.noop,
    };

    manager
        .create_backup(&target, &opts)
        .with_context(|| format!("backing up {}", manager.settings_root()))?;

    console.say(&format!("Backup created at:\n{}", target))?;
    Ok(Some(target))
}

/// Not being able to list or measure the settings root is the root's fault, not the backup's.
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<UnifyError>() {
        Some(UnifyError::Scan { .. }) | Some(UnifyError::Size { .. }) => 2,
        _ => 3,
    }
}

fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn usable_root(from_user: Option<&str>) -> anyhow::Result<Utf8PathBuf> {
    let root = settings_root(from_user)?;

    if root.is_dir() {
        Ok(root)
    } else {
        anyhow::bail!("{} is not a directory", root)
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let root = usable_root(cli.root.as_deref()).unwrap_or_else(|e| {
        eprintln!("ERROR: {}", e);
        exit(2);
    });

    let manager = BackupManager::new(&root);
    let now = local_now();

    if cli.check {
        match manager.status(now) {
            Ok(status) => {
                println!("{}", describe_status(&status));
                exit(if status.is_stale() { 1 } else { 0 });
            }
            Err(e) => {
                eprintln!("ERROR: {}", e);
                exit(2);
            }
        }
    }

    let mut console = Console::new(io::stdin().lock(), io::stdout());

    if let Err(e) = do_the_backup(&manager, &cli, now, &mut console) {
        eprintln!("ERROR: {:#}", e);
        exit(exit_code(&e));
    }
}
