//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins < 0 { "-" } else { "" };

    if short {
        // e.g. 08:30
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. 08h 30m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
