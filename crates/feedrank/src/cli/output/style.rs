//! ANSI styling for headers and status text.

/// Resets all attributes.
pub const RESET: &str = "\x1b[0m";
/// Bold text.
const BOLD: &str = "\x1b[1m";
/// Dimmed text.
const DIM: &str = "\x1b[2m";
/// Cyan foreground.
const CYAN: &str = "\x1b[36m";
/// Yellow foreground.
const YELLOW: &str = "\x1b[33m";

/// Formats text as a section header (bold cyan).
pub fn header(text: &str) -> String {
    format!("{BOLD}{CYAN}{text}{RESET}")
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{BOLD}{text}{RESET}")
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{DIM}{text}{RESET}")
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{YELLOW}{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_wrap_and_reset() {
        for styled in [header("h"), subheader("s"), dim("d"), warning("w")] {
            assert!(styled.starts_with("\x1b["));
            assert!(styled.ends_with(RESET));
        }
    }
}
