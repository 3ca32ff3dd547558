pub type IoResult<T> = std::io::Result<T>;

/// Everything the user can ask for at the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// 1-based list numbers, applied in order
    Toggle(Vec<usize>),
    Copy,
    Clear,
    Refresh,
    Backup,
    ToggleWindows,
    ToggleChats,
    Quit,
}
