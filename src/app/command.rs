/// A user intent, independent of whether it came from a key or a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Lap,
    Reset,
    ToggleTheme,
    Quit,
}
