use crate::errors::{UnifyError, UnifyResult};
use crate::types::{CharacterEntry, ConfigFiles, Opts};
use crate::verbose;
use camino::Utf8Path;
use filetime::{FileTime, set_file_times};
use std::fs;
use std::io;
use std::path::Path;

/// Copies a single file, overwriting any existing target, and carries over the source's access
/// and modification times. Permissions come across with the copy itself.
///
pub fn copy_file(src: &Utf8Path, dest: &Utf8Path, opts: &Opts) -> io::Result<u64> {
    copy_keeping_times(src.as_std_path(), dest.as_std_path(), opts)
}

fn copy_keeping_times(src: &Path, dest: &Path, opts: &Opts) -> io::Result<u64> {
    if opts.verbose || opts.noop {
        println!("{} -> {}", src.display(), dest.display());
    }

    if opts.noop {
        return Ok(0);
    }

    let bytes = fs::copy(src, dest)?;
    let metadata = fs::metadata(src)?;
    set_file_times(
        dest,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )?;

    Ok(bytes)
}

/// Recursively copies a directory tree into a new directory. The target must not exist.
/// Returns the number of bytes copied. Names below `src` need not be UTF-8.
///
pub fn copy_tree(src: &Utf8Path, dest: &Utf8Path, opts: &Opts) -> io::Result<u64> {
    if dest.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", dest),
        ));
    }

    copy_dir_contents(src.as_std_path(), dest.as_std_path(), opts)
}

fn copy_dir_contents(src: &Path, dest: &Path, opts: &Opts) -> io::Result<u64> {
    verbose!(opts, "creating {}", dest.display());

    if !opts.noop {
        fs::create_dir(dest)?;
    }

    let mut bytes = 0;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        bytes += if src_path.is_dir() {
            copy_dir_contents(&src_path, &dest_path, opts)?
        } else {
            copy_keeping_times(&src_path, &dest_path, opts)?
        };
    }

    Ok(bytes)
}

/// Checks that the source character has every selected file, returning their names. Nothing is
/// written if this fails.
///
pub fn files_to_copy(source_dir: &Utf8Path, files: &ConfigFiles) -> UnifyResult<Vec<&'static str>> {
    let selected = files.selected();

    if selected.is_empty() {
        return Err(UnifyError::NoFilesSelected);
    }

    if let Some(missing) = selected.iter().find(|f| !source_dir.join(f).is_file()) {
        return Err(UnifyError::MissingSourceFile {
            file: missing.to_string(),
            dir: source_dir.to_path_buf(),
        });
    }

    Ok(selected)
}

/// Copies the selected UI files from the source character to every destination. The first
/// failure stops the batch: destinations already done keep their new files. Returns the number
/// of destinations which were completed.
///
pub fn copy_config_files(
    settings_root: &Utf8Path,
    source: &CharacterEntry,
    destinations: &[CharacterEntry],
    files: &ConfigFiles,
    opts: &Opts,
) -> UnifyResult<usize> {
    let source_dir = source.dir(settings_root);
    let file_list = files_to_copy(&source_dir, files)?;
    let mut completed = 0;

    for dest in destinations {
        let dest_dir = dest.dir(settings_root);

        for file in &file_list {
            let dest_file = dest_dir.join(file);

            if let Err(e) = copy_file(&source_dir.join(file), &dest_file, opts) {
                return Err(UnifyError::Copy {
                    file: file.to_string(),
                    dest: dest_file,
                    completed,
                    source: e,
                });
            }
        }

        completed += 1;
    }

    log::info!(
        "copied {} from {} to {} character(s)",
        file_list.join(" and "),
        source,
        completed
    );

    Ok(completed)
}
