//! Backups are full copies of the settings root, written next to it and named
//! `Monsters and Memories.backup.YYYYMMDD.HHMMSS[.N]`. Only the date part of the name matters
//! when deciding whether a new one is due.
//!
use crate::constants::{BACKUP_MARKER, PRODUCT_NAME, STALE_AFTER_DAYS};
use crate::errors::{UnifyError, UnifyResult};
use crate::file_copier::copy_tree;
use crate::types::Opts;
use crate::verbose;
use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::fs;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackupRecord {
    pub path: Utf8PathBuf,
    pub date: Date,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackupStatus {
    pub latest: Option<Date>,
    pub days_old: Option<i64>,
}

impl BackupStatus {
    /// Compares whole calendar days, so a backup from late yesterday is one day old first thing
    /// this morning.
    pub fn new(latest: Option<Date>, now: OffsetDateTime) -> Self {
        Self {
            latest,
            days_old: latest.map(|date| (now.date() - date).whole_days()),
        }
    }

    pub fn is_stale(&self) -> bool {
        match self.days_old {
            Some(days) => days > STALE_AFTER_DAYS,
            None => true,
        }
    }

    pub fn age_label(&self) -> String {
        match self.days_old {
            Some(1) => " (1 day old)".to_string(),
            Some(days) => format!(" ({} days old)", days),
            None => " (no backup)".to_string(),
        }
    }
}

pub struct BackupManager {
    settings_root: Utf8PathBuf,
    name_pattern: Regex,
}

impl BackupManager {
    pub fn new(settings_root: &Utf8Path) -> Self {
        let pattern = format!(
            r"^{}\.{}\.(\d{{8}})(?:\.\d{{6}})?(?:\.\d+)?$",
            regex::escape(PRODUCT_NAME),
            BACKUP_MARKER
        );

        Self {
            settings_root: settings_root.to_path_buf(),
            name_pattern: Regex::new(&pattern).expect("invalid backup name regex"),
        }
    }

    pub fn settings_root(&self) -> &Utf8Path {
        &self.settings_root
    }

    /// Backups live alongside the settings root.
    pub fn backup_dir(&self) -> &Utf8Path {
        match self.settings_root.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        }
    }

    /// Pulls the date out of a backup directory name. Anything which doesn't follow the naming
    /// scheme, or has an impossible date, gives None.
    ///
    pub fn parse_backup_name(&self, name: &str) -> Option<Date> {
        let captures = self.name_pattern.captures(name)?;
        let digits = captures.get(1)?.as_str();
        Date::parse(digits, format_description!("[year][month][day]")).ok()
    }

    pub fn list_backups(&self) -> UnifyResult<Vec<BackupRecord>> {
        let dir = self.backup_dir();
        let scan_error = |source| UnifyError::Scan {
            path: dir.to_path_buf(),
            source,
        };

        let mut ret = Vec::new();

        for entry in fs::read_dir(dir).map_err(scan_error)? {
            let entry = entry.map_err(scan_error)?;

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(name) => {
                    log::debug!("ignoring {}: name is not UTF-8", name.to_string_lossy());
                    continue;
                }
            };

            let path = dir.join(&name);

            if !path.is_dir() {
                continue;
            }

            match self.parse_backup_name(&name) {
                Some(date) => ret.push(BackupRecord { path, date }),
                None if name.starts_with(PRODUCT_NAME) => {
                    log::debug!("ignoring {}: not a dated backup", path);
                }
                None => (),
            }
        }

        Ok(ret)
    }

    pub fn status(&self, now: OffsetDateTime) -> UnifyResult<BackupStatus> {
        let latest = self.list_backups()?.iter().map(|b| b.date).max();
        Ok(BackupStatus::new(latest, now))
    }

    /// A backup path stamped with the given time, which does not yet exist. If the plain name is
    /// taken a counter is added: `.1`, `.2` and so on.
    ///
    pub fn backup_path(&self, now: OffsetDateTime) -> UnifyResult<Utf8PathBuf> {
        let base = self.backup_dir().join(backup_name(now)?);
        let mut candidate = base.clone();
        let mut counter = 1;

        while candidate.exists() {
            candidate = Utf8PathBuf::from(format!("{}.{}", base, counter));
            counter += 1;
        }

        Ok(candidate)
    }

    /// Copies the whole settings root to `target`, returning the number of bytes written. If
    /// the copy fails part way, whatever was written stays where it is.
    ///
    pub fn create_backup(&self, target: &Utf8Path, opts: &Opts) -> UnifyResult<u64> {
        verbose!(opts, "backing up {} to {}", self.settings_root, target);

        let bytes =
            copy_tree(&self.settings_root, target, opts).map_err(|source| UnifyError::Backup {
                path: target.to_path_buf(),
                source,
            })?;

        log::info!("backed up {} bytes to {}", bytes, target);
        Ok(bytes)
    }
}

pub fn backup_name(now: OffsetDateTime) -> UnifyResult<String> {
    let stamp = now.format(format_description!(
        "[year][month][day].[hour][minute][second]"
    ))?;

    Ok(format!("{}.{}.{}", PRODUCT_NAME, BACKUP_MARKER, stamp))
}
