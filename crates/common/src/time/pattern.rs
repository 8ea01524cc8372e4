//! Date pattern tokens shared by formatting and parsing.
//!
//! A pattern is split once into tokens and literal runs. At each position the
//! longest matching token wins, so `yyyy` is never read as two `yy`s. Text
//! wrapped in single quotes is literal, and `''` produces a single quote.

/// A date or time field reference inside a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateToken {
    /// `yyyy`: four-digit year
    Year4,
    /// `yy`: two-digit year
    Year2,
    /// `MM`: zero-padded month
    Month2,
    /// `M`: month
    Month,
    /// `dd`: zero-padded day of month
    Day2,
    /// `d`: day of month
    Day,
    /// `HH`: zero-padded 24-hour clock
    Hour24Padded,
    /// `H`: 24-hour clock
    Hour24,
    /// `hh`: zero-padded 12-hour clock
    Hour12Padded,
    /// `h`: 12-hour clock
    Hour12,
    /// `mm`: zero-padded minute
    Minute2,
    /// `m`: minute
    Minute,
    /// `ss`: zero-padded second
    Second2,
    /// `s`: second
    Second,
    /// `SSS`: milliseconds
    Millis,
    /// `A`: `AM` / `PM`
    MeridiemUpper,
    /// `a`: `am` / `pm`
    MeridiemLower,
}

/// Longest tokens first so prefixes never shadow them.
const TOKENS: &[(&str, DateToken)] = &[
    ("yyyy", DateToken::Year4),
    ("SSS", DateToken::Millis),
    ("yy", DateToken::Year2),
    ("MM", DateToken::Month2),
    ("dd", DateToken::Day2),
    ("HH", DateToken::Hour24Padded),
    ("hh", DateToken::Hour12Padded),
    ("mm", DateToken::Minute2),
    ("ss", DateToken::Second2),
    ("M", DateToken::Month),
    ("d", DateToken::Day),
    ("H", DateToken::Hour24),
    ("h", DateToken::Hour12),
    ("m", DateToken::Minute),
    ("s", DateToken::Second),
    ("A", DateToken::MeridiemUpper),
    ("a", DateToken::MeridiemLower),
];

/// One piece of a tokenized pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPiece {
    /// A field to substitute
    Token(DateToken),
    /// Text copied through unchanged
    Literal(String),
}

/// Split `pattern` into tokens and literal runs.
pub fn tokenize(pattern: &str) -> Vec<PatternPiece> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if ch == '\'' {
            rest = read_quoted(&rest[1..], &mut literal);
            continue;
        }

        match TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
            Some((text, token)) => {
                if !literal.is_empty() {
                    pieces.push(PatternPiece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(PatternPiece::Token(*token));
                rest = &rest[text.len()..];
            }
            None => {
                literal.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    if !literal.is_empty() {
        pieces.push(PatternPiece::Literal(literal));
    }
    pieces
}

/// Consume a quoted section (opening quote already stripped) into `literal`
/// and return what follows the closing quote. An unterminated quote runs to
/// the end of the pattern.
fn read_quoted<'a>(after_quote: &'a str, literal: &mut String) -> &'a str {
    // '' outside of a quoted section is an escaped quote.
    if let Some(rest) = after_quote.strip_prefix('\'') {
        literal.push('\'');
        return rest;
    }

    let mut rest = after_quote;
    loop {
        match rest.find('\'') {
            Some(pos) => {
                literal.push_str(&rest[..pos]);
                let after = &rest[pos + 1..];
                if let Some(escaped) = after.strip_prefix('\'') {
                    literal.push('\'');
                    rest = escaped;
                } else {
                    return after;
                }
            }
            None => {
                literal.push_str(rest);
                return "";
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::pattern.
    use super::DateToken::*;
    use super::*;

    fn lit(text: &str) -> PatternPiece {
        PatternPiece::Literal(text.to_string())
    }

    /// Validates `tokenize` behavior for the default pattern.
    ///
    /// Assertions:
    /// - Confirms separators become literal pieces between tokens.
    #[test]
    fn test_tokenize_default_pattern() {
        assert_eq!(
            tokenize("yyyy-MM-dd HH:mm:ss"),
            vec![
                PatternPiece::Token(Year4),
                lit("-"),
                PatternPiece::Token(Month2),
                lit("-"),
                PatternPiece::Token(Day2),
                lit(" "),
                PatternPiece::Token(Hour24Padded),
                lit(":"),
                PatternPiece::Token(Minute2),
                lit(":"),
                PatternPiece::Token(Second2),
            ]
        );
    }

    #[test]
    fn test_tokenize_longest_match() {
        assert_eq!(tokenize("yyyyy"), vec![PatternPiece::Token(Year4), lit("y")]);
        assert_eq!(tokenize("yyy"), vec![PatternPiece::Token(Year2), lit("y")]);
        assert_eq!(tokenize("SSSS"), vec![PatternPiece::Token(Millis), lit("S")]);
    }

    /// Validates quoted literals and escaped quotes.
    ///
    /// Assertions:
    /// - Confirms quoted letters are not tokens.
    /// - Confirms `''` yields a single quote both inside and outside quotes.
    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(tokenize("'at' h"), vec![lit("at "), PatternPiece::Token(Hour12)]);
        assert_eq!(tokenize("''"), vec![lit("'")]);
        assert_eq!(tokenize("'it''s'"), vec![lit("it's")]);
        assert_eq!(tokenize("'open"), vec![lit("open")]);
    }

    #[test]
    fn test_tokenize_passes_unknown_characters() {
        assert_eq!(tokenize("Q1 ✓"), vec![lit("Q1 ✓")]);
    }
}
