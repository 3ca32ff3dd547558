use crate::constants::LARGE_DIRECTORY_BYTES;
use crate::errors::{UnifyError, UnifyResult};
use byte_unit::{Byte, Unit, UnitType};
use camino::Utf8Path;
use walkdir::WalkDir;

/// Adds up the size of every file under `dir`. Only an unreadable `dir` is an error: anything
/// which vanishes or can't be read during the walk is left out of the total.
///
pub fn directory_size(dir: &Utf8Path) -> UnifyResult<u64> {
    dir.read_dir_utf8().map_err(|source| UnifyError::Size {
        path: dir.to_path_buf(),
        source,
    })?;

    let total: u64 = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum();

    Ok(total)
}

pub fn is_unusually_large(bytes: u64) -> bool {
    bytes > LARGE_DIRECTORY_BYTES
}

/// Human-readable size in binary steps, to one decimal place, e.g. "1.5 KB".
pub fn format_size(bytes: u64) -> String {
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);

    let label = match adjusted.get_unit() {
        Unit::B => "B",
        Unit::KiB => "KB",
        Unit::MiB => "MB",
        Unit::GiB => "GB",
        _ => return format!("{:.1} TB", bytes as f64 / 1024_f64.powi(4)),
    };

    format!("{:.1} {}", adjusted.get_value(), label)
}
