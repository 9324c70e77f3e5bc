/// ANSI color helper constants for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Finite palette the calendar cycles through when tagging charge codes.
/// Ten slots; assignment is index modulo palette size over the sorted
/// charge-code list.
pub const CHARGE_PALETTE: [&str; 10] = [
    BLUE,
    CYAN,
    MAGENTA,
    GREEN,
    YELLOW,
    RED,
    "\x1b[94m", // bright blue
    "\x1b[96m", // bright cyan
    "\x1b[95m", // bright magenta
    "\x1b[92m", // bright green
];

/// Sentinel tag for charge codes missing from the color lookup.
pub const UNASSIGNED: &str = GREY;
