use owo_colors::OwoColorize;
use std::fmt::Display;

/// 成功
pub fn success(message: impl Display) {
    println!("{} {}", "✓".green(), message);
}

/// 何もしなかった
pub fn skipped(message: impl Display) {
    println!("{} {}", "•".yellow(), message);
}
