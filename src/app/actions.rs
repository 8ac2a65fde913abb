#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,

    InputChar(char),
    Backspace,
    ClearInput,
    /// Clear the query, or quit when it is already empty.
    Escape,

    ListUp,
    ListDown,
    GoTop,
    GoBottom,
    /// Choose the highlighted search result.
    Activate,
    /// Drop the playing selection locally. The device is not paused.
    Deselect,
    /// Re-read the access token from the environment and config file.
    ReloadToken,

    Resize,
}
