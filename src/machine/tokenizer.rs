//! Source tokenizer.
//!
//! The language has no quoting, escaping, or comment syntax: a token is any
//! maximal run of non-whitespace characters, and token order is source order.

/// Splits source text into an ordered sequence of tokens.
///
/// Empty input yields an empty sequence, which assembles to a program that
/// immediately terminates.
pub fn tokenize(source: &str) -> Vec<String> {
    source.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn preserves_source_order() {
        assert_eq!(tokenize("5 3 + ."), ["5", "3", "+", "."]);
    }

    #[test]
    fn arbitrary_whitespace_separates_tokens() {
        assert_eq!(
            tokenize("loop:\n\tdup .\r\n  :loop\tgoto"),
            ["loop:", "dup", ".", ":loop", "goto"]
        );
    }

    #[test]
    fn no_token_spans_whitespace() {
        for tok in tokenize("a b\tc\nd") {
            assert!(!tok.chars().any(char::is_whitespace));
        }
    }
}
