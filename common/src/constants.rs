/// Name of the game's settings directory, and the prefix of every backup of it.
pub const PRODUCT_NAME: &str = "Monsters and Memories";

/// Path from the per-user LocalLow directory to the settings root.
pub const SETTINGS_PATH: [&str; 2] = ["Niche Worlds Cult", PRODUCT_NAME];

/// Marker between the product name and the timestamp in a backup name.
pub const BACKUP_MARKER: &str = "backup";

/// The UI files which can be copied between characters.
pub const WINDOWS_FILE: &str = "windows.json";
pub const CHATS_FILE: &str = "chats.json";

/// The game keeps this next to the server directories. It never holds characters.
pub const RESERVED_SERVER: &str = "journal";

/// A settings tree bigger than this is almost certainly a runaway log file.
pub const LARGE_DIRECTORY_BYTES: u64 = 1024 * 1024 * 1024;

/// Backups older than this many calendar days are stale.
pub const STALE_AFTER_DAYS: i64 = 1;
