pub mod browse;
pub mod search;
pub mod suggest;

use is_terminal::IsTerminal;

/// Color only when stdout is a real terminal.
pub(crate) fn use_color() -> bool {
    std::io::stdout().is_terminal()
}
