use camino::{Utf8Path, Utf8PathBuf};
use camino_tempfile::{Utf8TempDir, tempdir};
use std::fs;

/// A throwaway settings tree. The settings root sits inside the temp dir so backups, which are
/// written next to it, are cleaned up too.
pub struct SettingsTree {
    pub tmp: Utf8TempDir,
    pub root: Utf8PathBuf,
}

/// Builds `<tmp>/Monsters and Memories` and every directory given, relative to it, e.g.
/// "Faydark/Alice".
pub fn settings_tree(dirs: &[&str]) -> SettingsTree {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("Monsters and Memories");
    fs::create_dir(&root).unwrap();

    for dir in dirs {
        fs::create_dir_all(root.join(dir)).unwrap();
    }

    SettingsTree { tmp, root }
}

pub fn write_file(dir: &Utf8Path, name: &str, contents: &str) -> Utf8PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Takes every permission off `dir`. Returns false if it can still be listed, as it can when
/// the tests run as root.
#[cfg(unix)]
pub fn lock_dir(dir: &Utf8Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
    fs::read_dir(dir).is_err()
}

#[cfg(unix)]
pub fn unlock_dir(dir: &Utf8Path) {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
}
