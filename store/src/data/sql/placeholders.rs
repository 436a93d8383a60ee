//! Placeholder runs for `IN (...)` lists

/// `n` comma-separated placeholders (`"?,?,?"`), empty when `n <= 0`
pub fn placeholders(n: i64) -> String {
    if n <= 0 {
        return String::new();
    }
    let mut out = "?,".repeat(n as usize);
    out.pop();
    out
}
