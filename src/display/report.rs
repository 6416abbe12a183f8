//! Report formatting utilities for terminal output

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// A label on the left and a value right-aligned to `width` columns
pub fn label_value(label: &str, value: &str, width: usize) -> String {
    let used = label.chars().count() + value.chars().count();
    let padding = width.saturating_sub(used).max(1);
    format!("{}{}{}", label, " ".repeat(padding), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }

    #[test]
    fn test_label_value() {
        assert_eq!(label_value("Total:", "$5.00", 14), "Total:   $5.00");
        assert_eq!(label_value("Long label", "$5.00", 8), "Long label $5.00");
    }

    #[test]
    fn test_separators() {
        assert_eq!(separator(3).chars().count(), 3);
        assert_eq!(double_separator(2), "══");
    }
}
