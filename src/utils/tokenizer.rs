/// Maximum token length to index. Alphanumeric runs longer than this are
/// truncated to their first `MAX_TOKEN_LENGTH` bytes rather than dropped.
pub const MAX_TOKEN_LENGTH: usize = 128;

/// A token cut from one page of text, with the byte offset of its first
/// character within that page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub text: String,
    pub offset: u64,
}

/// Split page text into index tokens: maximal runs of ASCII alphanumerics,
/// folded to lowercase. Every other byte is a separator, including each byte
/// of a multi-byte UTF-8 sequence, so no byte above 0x7F ever reaches the
/// trie.
pub fn tokenize(text: &str) -> Vec<TokenSpan> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0usize;

    for (i, &byte) in bytes.iter().enumerate() {
        if byte.is_ascii_alphanumeric() {
            if current.is_empty() {
                start = i;
            }
            if current.len() < MAX_TOKEN_LENGTH {
                current.push(byte.to_ascii_lowercase() as char);
            }
        } else if !current.is_empty() {
            tokens.push(TokenSpan {
                text: std::mem::take(&mut current),
                offset: start as u64,
            });
        }
    }

    if !current.is_empty() {
        tokens.push(TokenSpan {
            text: current,
            offset: start as u64,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[TokenSpan]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_splits_on_non_alphanumerics() {
        let spans = tokenize("Hello, world! x42_y");
        assert_eq!(texts(&spans), vec!["hello", "world", "x42", "y"]);
    }

    #[test]
    fn test_offsets_are_page_byte_offsets() {
        let spans = tokenize("one two  three");
        assert_eq!(spans[0].offset, 0);
        assert_eq!(spans[1].offset, 4);
        assert_eq!(spans[2].offset, 9);
    }

    #[test]
    fn test_case_folded() {
        let spans = tokenize("ToolKit TOOLKIT toolkit");
        assert!(spans.iter().all(|s| s.text == "toolkit"));
    }

    #[test]
    fn test_non_ascii_is_a_separator() {
        // é is two bytes, both above 0x7F: the run breaks around it.
        let spans = tokenize("caf\u{e9}s r\u{e9}sum\u{e9}");
        assert_eq!(texts(&spans), vec!["caf", "s", "r", "sum"]);
        // Offsets still count bytes of the original text.
        assert_eq!(spans[1].offset, 5);
    }

    #[test]
    fn test_long_runs_truncate() {
        let long = "a".repeat(MAX_TOKEN_LENGTH + 50);
        let spans = tokenize(&long);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text.len(), MAX_TOKEN_LENGTH);
        assert_eq!(spans[0].offset, 0);
    }

    #[test]
    fn test_empty_and_separator_only_pages() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" .,;\t\n").is_empty());
    }
}
