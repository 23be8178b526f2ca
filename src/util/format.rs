#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a count with comma thousands separators, e.g. `1234` becomes
/// `"1,234"`, matching `toLocaleString()` output in an en locale.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
