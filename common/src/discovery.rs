use crate::errors::{UnifyError, UnifyResult};
use crate::rules::is_omitted;
use crate::types::{CharacterEntry, Characters};
use camino::Utf8Path;
use std::fs;

/// Names of the directories directly under `dir`, sorted. Anything which is not a directory
/// (after following links), or whose name is not UTF-8, is ignored.
///
fn subdirectories(dir: &Utf8Path) -> UnifyResult<Vec<String>> {
    let scan_error = |source| UnifyError::Scan {
        path: dir.to_path_buf(),
        source,
    };

    let mut ret = Vec::new();

    for entry in fs::read_dir(dir).map_err(scan_error)? {
        let entry = entry.map_err(scan_error)?;
        let path = entry.path();

        if !path.is_dir() {
            log::debug!("ignoring {}: not a directory", path.display());
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => ret.push(name),
            Err(_) => log::debug!("ignoring {}: name is not UTF-8", path.display()),
        }
    }

    ret.sort();
    Ok(ret)
}

/// Finds every character folder two levels under the settings root, skipping servers which
/// match any of the omit rules. The first directory which cannot be listed aborts the scan.
///
pub fn scan(settings_root: &Utf8Path, omit: &[String]) -> UnifyResult<Characters> {
    let mut ret = Vec::new();

    for server in subdirectories(settings_root)? {
        if is_omitted(&server, omit) {
            log::debug!("skipping server directory {}", server);
            continue;
        }

        for character in subdirectories(&settings_root.join(&server))? {
            ret.push(CharacterEntry::new(&server, &character));
        }
    }

    log::info!("found {} characters under {}", ret.len(), settings_root);
    Ok(ret)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rules::server_rules;
    use crate::spec_helper::{settings_tree, write_file};
    #[cfg(unix)]
    use crate::spec_helper::{lock_dir, unlock_dir};

    #[test]
    fn test_scan_skips_journal() {
        let tree = settings_tree(&[
            "Faydark/Bob",
            "Faydark/Alice",
            "journal/notes",
            "journal/more",
        ]);

        assert_eq!(
            vec![
                CharacterEntry::new("Faydark", "Alice"),
                CharacterEntry::new("Faydark", "Bob"),
            ],
            scan(&tree.root, &server_rules(None)).unwrap()
        );
    }

    #[test]
    fn test_scan_skips_journal_in_any_case() {
        let tree = settings_tree(&["Faydark/Alice", "Journal/notes"]);

        assert_eq!(
            vec![CharacterEntry::new("Faydark", "Alice")],
            scan(&tree.root, &server_rules(None)).unwrap()
        );
    }

    #[test]
    fn test_scan_orders_servers_and_ignores_files() {
        let tree = settings_tree(&["Faydark/Zed", "Cragmire/Carol", "Cragmire/Anna", "Empty"]);

        write_file(&tree.root, "player.log", "noise");
        write_file(&tree.root.join("Faydark"), "server.json", "{}");

        assert_eq!(
            vec![
                CharacterEntry::new("Cragmire", "Anna"),
                CharacterEntry::new("Cragmire", "Carol"),
                CharacterEntry::new("Faydark", "Zed"),
            ],
            scan(&tree.root, &server_rules(None)).unwrap()
        );
    }

    #[test]
    fn test_scan_with_user_rules() {
        let tree = settings_tree(&["Faydark/Alice", "TestServer/Tester"]);

        assert_eq!(
            vec![CharacterEntry::new("Faydark", "Alice")],
            scan(&tree.root, &server_rules(Some("test*"))).unwrap()
        );
    }

    #[test]
    fn test_scan_missing_root() {
        let tree = settings_tree(&[]);
        let missing = tree.root.join("nowhere");

        match scan(&missing, &server_rules(None)) {
            Err(UnifyError::Scan { path, .. }) => assert_eq!(missing, path),
            other => panic!("expected a scan error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tree = settings_tree(&["Faydark/Alice"]);
        let root = tree.root.as_std_path();
        fs::create_dir_all(root.join(OsStr::from_bytes(b"Cr\xe4gmire")).join("Carol")).unwrap();
        fs::create_dir(root.join("Faydark").join(OsStr::from_bytes(b"B\xf6b"))).unwrap();

        assert_eq!(
            vec![CharacterEntry::new("Faydark", "Alice")],
            scan(&tree.root, &server_rules(None)).unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_aborts_on_unreadable_server() {
        let tree = settings_tree(&["Cragmire/Carol", "Faydark/Alice"]);
        let server = tree.root.join("Faydark");

        if !lock_dir(&server) {
            unlock_dir(&server);
            return;
        }

        let result = scan(&tree.root, &server_rules(None));
        unlock_dir(&server);

        match result {
            Err(UnifyError::Scan { path, .. }) => assert_eq!(server, path),
            other => panic!("expected a scan error, got {:?}", other),
        }
    }
}
