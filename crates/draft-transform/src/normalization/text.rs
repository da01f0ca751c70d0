/// Trimmed categorical value, `None` when blank.
pub fn clean_categorical(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_categorical_is_none() {
        assert_eq!(clean_categorical(" R "), Some("R"));
        assert_eq!(clean_categorical("   "), None);
        assert_eq!(clean_categorical(""), None);
    }
}
