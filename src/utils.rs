/// Hide a credential in the request panel, long tokens keep their ends visible
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let len = chars.len();
    if len <= 15 {
        // Too short to safely show, just show dots
        return "•".repeat(len);
    }

    let first: String = chars[..4].iter().collect();
    let last: String = chars[len - 4..].iter().collect();
    format!("{first}...{last}")
}

/// Keep the tail of a string that must fit in `width` columns
pub fn truncate_start(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    if width <= 3 {
        return ".".repeat(width);
    }
    let tail: String = text.chars().skip(count - (width - 3)).collect();
    format!("...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_short_secret() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("hunter2"), "•••••••");
    }

    #[test]
    fn test_mask_long_token_keeps_ends() {
        assert_eq!(
            mask_secret("eyJhbGciOiJIUzI1NiJ9.payload.sig"),
            "eyJh....sig"
        );
    }

    #[test]
    fn test_mask_non_ascii() {
        let secret = "ééééééééééééééééé";
        assert_eq!(mask_secret(secret), "éééé...éééé");
    }

    #[test]
    fn test_truncate_start() {
        assert_eq!(truncate_start("short", 10), "short");
        assert_eq!(truncate_start("https://example.com/long", 10), "...om/long");
        assert_eq!(truncate_start("abcdef", 2), "..");
    }
}
