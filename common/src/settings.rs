use crate::constants::SETTINGS_PATH;
use crate::errors::{UnifyError, UnifyResult};
use camino::Utf8PathBuf;

/// Where the game keeps its settings: a sibling of the roaming data directory called
/// LocalLow, which on Windows is `%APPDATA%\..\LocalLow`.
///
pub fn default_settings_root() -> UnifyResult<Utf8PathBuf> {
    let data_dir = dirs::data_dir().ok_or(UnifyError::NoSettingsRoot)?;
    let data_dir = Utf8PathBuf::from_path_buf(data_dir).map_err(|_| UnifyError::NoSettingsRoot)?;
    let base = data_dir.parent().unwrap_or(data_dir.as_path()).join("LocalLow");

    Ok(SETTINGS_PATH.iter().fold(base, |path, part| path.join(part)))
}

/// The user's choice if they made one, otherwise the platform default.
pub fn settings_root(from_user: Option<&str>) -> UnifyResult<Utf8PathBuf> {
    match from_user {
        Some(dir) => Ok(Utf8PathBuf::from(dir)),
        None => default_settings_root(),
    }
}
