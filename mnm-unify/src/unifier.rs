use crate::types::{Command, IoResult};
use crate::user_interaction;
use camino::{Utf8Path, Utf8PathBuf};
use common::backup::BackupManager;
use common::console::Console;
use common::discovery;
use common::file_copier;
use common::selection::SelectionState;
use common::types::{Characters, ConfigFiles, Opts};
use common::usage;
use std::io::{BufRead, Write};
use time::OffsetDateTime;

/// Holds everything the user is working with: the characters found on disk, what they've
/// selected, which files they want, and the backups. The console only shows this state and
/// passes commands in.
pub struct Unifier<R, W> {
    settings_root: Utf8PathBuf,
    omit: Vec<String>,
    characters: Characters,
    selection: SelectionState,
    files: ConfigFiles,
    opts: Opts,
    backups: BackupManager,
    console: Console<R, W>,
    clock: fn() -> OffsetDateTime,
    status: String,
}

impl<R: BufRead, W: Write> Unifier<R, W> {
    pub fn new(
        settings_root: &Utf8Path,
        omit: Vec<String>,
        files: ConfigFiles,
        opts: Opts,
        console: Console<R, W>,
        clock: fn() -> OffsetDateTime,
    ) -> Self {
        Self {
            settings_root: settings_root.to_path_buf(),
            omit,
            characters: Vec::new(),
            selection: SelectionState::new(),
            files,
            opts,
            backups: BackupManager::new(settings_root),
            console,
            clock,
            status: "Ready".to_string(),
        }
    }

    /// Warns about a bloated settings directory, and offers a backup if the last one is more
    /// than a day old.
    ///
    pub fn startup_check(&mut self) -> IoResult<()> {
        match usage::directory_size(&self.settings_root) {
            Ok(size) if usage::is_unusually_large(size) => {
                log::warn!("{} holds {} bytes", self.settings_root, size);
                self.console.warn(&format!(
                    "Your settings directory is very large ({}).\n\
                     This is not normal. A log file is most likely the culprit.",
                    usage::format_size(size)
                ))?;
            }
            Ok(_) => (),
            Err(e) => return self.console.error(&e.to_string()),
        }

        let now = (self.clock)();

        let status = match self.backups.status(now) {
            Ok(status) => status,
            Err(e) => return self.console.error(&e.to_string()),
        };

        if status.is_stale() {
            let target = match self.backups.backup_path(now) {
                Ok(target) => target,
                Err(e) => return self.console.error(&e.to_string()),
            };

            if self.console.confirm(&format!(
                "No recent backup found. Create backup?\n\n{}",
                target
            ))? {
                self.create_backup(&target)?;
            }
        }

        Ok(())
    }

    fn create_backup(&mut self, target: &Utf8Path) -> IoResult<()> {
        match self.backups.create_backup(target, &self.opts) {
            Ok(_) => {
                self.status = "Backup complete".to_string();
                self.console
                    .say(&format!("Backup created at:\n{}", target))
            }
            Err(e) => self
                .console
                .error(&format!("Failed to create backup:\n{}", e)),
        }
    }

    pub fn backup_age(&self) -> String {
        self.backups
            .status((self.clock)())
            .map(|status| status.age_label())
            .unwrap_or_else(|_| " (unknown)".to_string())
    }

    /// Reloads the character list, dropping the selection. If the scan fails, the old list and
    /// selection are kept.
    ///
    pub fn rescan(&mut self) -> IoResult<()> {
        match discovery::scan(&self.settings_root, &self.omit) {
            Ok(characters) => {
                self.characters = characters;
                self.selection.clear();
                self.status = format!("Found {} characters", self.characters.len());
                Ok(())
            }
            Err(e) => self.console.error(&format!("Failed to scan: {}", e)),
        }
    }

    pub fn toggle(&mut self, numbers: &[usize]) -> IoResult<()> {
        for number in numbers {
            match number.checked_sub(1).and_then(|i| self.characters.get(i)) {
                Some(entry) => self.selection.toggle(entry),
                None => self
                    .console
                    .warn(&format!("There is no character numbered {}", number))?,
            }
        }

        Ok(())
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    pub fn copy_files(&mut self) -> IoResult<()> {
        let (source, destinations) = match self.selection.source() {
            Some(source) if self.selection.can_copy() => {
                (source.clone(), self.selection.destinations().to_vec())
            }
            _ => return self.console.warn("Select source and destinations"),
        };

        let file_list =
            match file_copier::files_to_copy(&source.dir(&self.settings_root), &self.files) {
                Ok(list) => list,
                Err(e) => return self.console.error(&e.to_string()),
            };

        let question = format!(
            "Copy {}?\n\nFrom: {}\nTo: {}",
            file_list.join(" and "),
            source.character,
            self.selection.destination_names().join(", ")
        );

        if !self.console.confirm(&question)? {
            return Ok(());
        }

        match file_copier::copy_config_files(
            &self.settings_root,
            &source,
            &destinations,
            &self.files,
            &self.opts,
        ) {
            Ok(completed) => {
                self.status = format!("Copied to {} character(s)", completed);
                let message = self.status.clone();
                self.console.say(&message)
            }
            Err(e) => self.console.error(&e.to_string()),
        }
    }

    /// A backup on demand. The user is asked twice if the settings directory is suspiciously
    /// big.
    ///
    pub fn manual_backup(&mut self) -> IoResult<()> {
        let target = match self.backups.backup_path((self.clock)()) {
            Ok(target) => target,
            Err(e) => return self.console.error(&e.to_string()),
        };

        let size = match usage::directory_size(&self.settings_root) {
            Ok(size) => size,
            Err(e) => return self.console.error(&e.to_string()),
        };

        let size_str = usage::format_size(size);

        if usage::is_unusually_large(size)
            && !self.console.confirm(&format!(
                "Directory is {}. This is not normal.\n\nCreate backup at:\n{}",
                size_str, target
            ))?
        {
            return Ok(());
        }

        if self.console.confirm(&format!(
            "Size: {}\n\nCreate backup at:\n{}",
            size_str, target
        ))? {
            self.create_backup(&target)?;
        }

        Ok(())
    }

    fn render(&mut self) -> IoResult<()> {
        self.console.say("")?;
        user_interaction::print_characters(&mut self.console, &self.characters, &self.selection)?;
        let description = self.selection.describe();
        self.console.say(&description)?;
        let status = self.status.clone();
        self.console.say(&status)
    }

    /// Shows the list and handles commands until the user quits or input runs out.
    pub fn run(&mut self) -> IoResult<()> {
        loop {
            self.render()?;

            let prompt = user_interaction::command_prompt(&self.files, &self.backup_age());
            let input = match self.console.ask(&prompt)? {
                Some(input) => input,
                None => return Ok(()),
            };

            match user_interaction::parse_command(&input) {
                Some(Command::Toggle(numbers)) => self.toggle(&numbers)?,
                Some(Command::Copy) => self.copy_files()?,
                Some(Command::Clear) => self.clear(),
                Some(Command::Refresh) => self.rescan()?,
                Some(Command::Backup) => self.manual_backup()?,
                Some(Command::ToggleWindows) => self.files.windows = !self.files.windows,
                Some(Command::ToggleChats) => self.files.chats = !self.files.chats,
                Some(Command::Quit) => return Ok(()),
                None if input.is_empty() => (),
                None => self.console.say(user_interaction::help_text())?,
            }
        }
    }
}

#[cfg(test)]
impl<R: BufRead, W: Write> Unifier<R, W> {
    pub fn characters(&self) -> &Characters {
        &self.characters
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn files(&self) -> &ConfigFiles {
        &self.files
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }
}
