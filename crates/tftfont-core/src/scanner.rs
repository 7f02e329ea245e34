//! Tokenizer for the C-like source text bitmap fonts are distributed as.
//!
//! The scanner understands just enough C to walk array initializers and
//! struct literals: numbers, identifiers, the handful of punctuation marks
//! the parsers anchor on, and comments. Whitespace and line comments (`//`
//! and preprocessor `#` lines) are discarded. Block comments are returned
//! as `CommentStart`/`CommentEnd` markers so callers decide whether their
//! contents matter.

use crate::error::FormatError;

/// Token classes produced by [`Scanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Signed decimal, `-?[0-9]+`.
    Integer,
    /// `0x[0-9a-fA-F]+`.
    Hex,
    /// `\[0-9]+`.
    Octal,
    /// Identifier, `[A-Za-z][A-Za-z0-9_]*`.
    Word,
    /// `/*`
    CommentStart,
    /// `*/`
    CommentEnd,
    /// `[`
    LeftBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `;`
    Semicolon,
    /// Any other single character (`,`, `]`, `=`, `&`, ...).
    Special,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Short human-readable name used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Integer => "integer",
            TokenKind::Hex => "hex literal",
            TokenKind::Octal => "octal literal",
            TokenKind::Word => "identifier",
            TokenKind::CommentStart => "/*",
            TokenKind::CommentEnd => "*/",
            TokenKind::LeftBracket => "[",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Special => "special character",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// 1-based source line.
    pub line: u32,
}

impl<'a> Token<'a> {
    /// Returns true if this is a `Word` spelled exactly `word`.
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.text == word
    }

    /// Returns true if this is the single special character `ch`.
    pub fn is_special(&self, ch: char) -> bool {
        self.kind == TokenKind::Special && self.text.len() == ch.len_utf8() && self.text.starts_with(ch)
    }

    /// Text shown for this token in error messages.
    pub fn display_text(&self) -> &str {
        if self.kind == TokenKind::Eof {
            "EOF"
        } else {
            self.text
        }
    }

    /// Value of an `Integer` token.
    pub fn int_value(&self) -> Result<i64, FormatError> {
        self.text.parse::<i64>().map_err(|_| self.bad_number())
    }

    /// Value of a `Hex` token.
    pub fn hex_value(&self) -> Result<u32, FormatError> {
        let digits = self.text.get(2..).ok_or_else(|| self.bad_number())?;
        u32::from_str_radix(digits, 16).map_err(|_| self.bad_number())
    }

    /// Value of a `Hex` token that must fit in one byte.
    pub fn byte_value(&self) -> Result<u8, FormatError> {
        let value = self.hex_value()?;
        u8::try_from(value).map_err(|_| self.bad_number())
    }

    fn bad_number(&self) -> FormatError {
        FormatError::BadNumber {
            token: self.text.to_string(),
            line: self.line,
        }
    }
}

/// Streaming tokenizer over a source string.
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    line: u32,
    peeked: Option<Token<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            peeked: None,
        }
    }

    /// Line of the most recently produced token's end.
    pub fn line(&self) -> u32 {
        self.peeked.map_or(self.line, |t| t.line)
    }

    /// Returns the next token. Past the end this keeps returning `Eof`.
    pub fn next_token(&mut self) -> Token<'a> {
        match self.peeked.take() {
            Some(token) => token,
            None => self.lex(),
        }
    }

    /// Looks at the next token without consuming it.
    pub fn peek(&mut self) -> Token<'a> {
        match self.peeked {
            Some(token) => token,
            None => {
                let token = self.lex();
                self.peeked = Some(token);
                token
            }
        }
    }

    /// Consumes the next token, which must be of `kind`.
    ///
    /// `what` names the missing element in the error message.
    pub fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token<'a>, FormatError> {
        let token = self.next_token();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(unexpected(what, &token))
        }
    }

    /// Consumes the next token, which must be the special character `ch`.
    pub fn expect_special(&mut self, ch: char, what: &str) -> Result<Token<'a>, FormatError> {
        let token = self.next_token();
        if token.is_special(ch) {
            Ok(token)
        } else {
            Err(unexpected(what, &token))
        }
    }

    /// Skips forward to the next token of `kind` and returns it.
    pub fn skip_to(&mut self, kind: TokenKind, what: &str) -> Result<Token<'a>, FormatError> {
        loop {
            let token = self.next_token();
            if token.kind == kind {
                return Ok(token);
            }
            if token.kind == TokenKind::Eof {
                return Err(unexpected(what, &token));
            }
        }
    }

    /// Skips forward to the first `Word` satisfying `pred`.
    pub fn find_word<F>(&mut self, mut pred: F) -> Option<Token<'a>>
    where
        F: FnMut(&str) -> bool,
    {
        loop {
            let token = self.next_token();
            match token.kind {
                TokenKind::Word if pred(token.text) => return Some(token),
                TokenKind::Eof => return None,
                _ => {}
            }
        }
    }

    /// Consumes tokens up to and including the `*/` that closes a block
    /// comment whose `/*` has already been read.
    pub fn skip_block_comment(&mut self, opened_on: u32) -> Result<(), FormatError> {
        loop {
            match self.next_token().kind {
                TokenKind::CommentEnd => return Ok(()),
                TokenKind::Eof => return Err(FormatError::UnterminatedComment { line: opened_on }),
                _ => {}
            }
        }
    }

    /// Returns the next token that is not inside a block comment.
    pub fn next_significant(&mut self) -> Result<Token<'a>, FormatError> {
        loop {
            let token = self.next_token();
            if token.kind == TokenKind::CommentStart {
                self.skip_block_comment(token.line)?;
                continue;
            }
            return Ok(token);
        }
    }

    /// Collects every hex byte up to the `terminator` token.
    ///
    /// Tokens of other kinds are ignored. When `skip_comments` is set, block
    /// comments are skipped as a unit so a terminator inside one does not end
    /// the array.
    pub fn read_hex_until(
        &mut self,
        terminator: TokenKind,
        skip_comments: bool,
        what: &str,
    ) -> Result<Vec<u8>, FormatError> {
        let mut bytes = Vec::new();
        loop {
            let token = if skip_comments {
                self.next_significant()?
            } else {
                self.next_token()
            };
            match token.kind {
                kind if kind == terminator => return Ok(bytes),
                TokenKind::Hex => bytes.push(token.byte_value()?),
                TokenKind::Eof => {
                    return Err(FormatError::Truncated {
                        what: what.to_string(),
                        line: token.line,
                    })
                }
                _ => {}
            }
        }
    }

    fn lex(&mut self) -> Token<'a> {
        self.skip_trivia();
        let src = self.src;
        let bytes = src.as_bytes();

        let start = self.pos;
        let line = self.line;
        let rest = &bytes[start..];
        let Some(&first) = rest.first() else {
            return Token {
                kind: TokenKind::Eof,
                text: "",
                line,
            };
        };

        let (kind, len) = if first == b'0'
            && matches!(rest.get(1), Some(b'x' | b'X'))
            && rest.get(2).is_some_and(u8::is_ascii_hexdigit)
        {
            (TokenKind::Hex, 2 + run_len(&rest[2..], u8::is_ascii_hexdigit))
        } else if first == b'\\' && rest.get(1).is_some_and(u8::is_ascii_digit) {
            (TokenKind::Octal, 1 + run_len(&rest[1..], u8::is_ascii_digit))
        } else if first.is_ascii_alphabetic() {
            let tail = run_len(&rest[1..], |b| b.is_ascii_alphanumeric() || *b == b'_');
            (TokenKind::Word, 1 + tail)
        } else if first.is_ascii_digit() {
            (TokenKind::Integer, run_len(rest, u8::is_ascii_digit))
        } else if first == b'-' && rest.get(1).is_some_and(u8::is_ascii_digit) {
            (TokenKind::Integer, 1 + run_len(&rest[1..], u8::is_ascii_digit))
        } else if rest.starts_with(b"/*") {
            (TokenKind::CommentStart, 2)
        } else if rest.starts_with(b"*/") {
            (TokenKind::CommentEnd, 2)
        } else {
            let kind = match first {
                b'[' => TokenKind::LeftBracket,
                b'{' => TokenKind::LeftBrace,
                b'}' => TokenKind::RightBrace,
                b';' => TokenKind::Semicolon,
                _ => TokenKind::Special,
            };
            let len = src[start..].chars().next().map_or(1, char::len_utf8);
            (kind, len)
        };

        self.pos = start + len;
        Token {
            kind,
            text: &src[start..self.pos],
            line,
        }
    }

    /// Skips whitespace and line comments, counting newlines.
    fn skip_trivia(&mut self) {
        let src = self.src;
        let bytes = src.as_bytes();
        loop {
            while let Some(&b) = bytes.get(self.pos) {
                if b == b'\n' {
                    self.line += 1;
                } else if !b.is_ascii_whitespace() {
                    break;
                }
                self.pos += 1;
            }
            let rest = &bytes[self.pos..];
            if rest.first() == Some(&b'#') || rest.starts_with(b"//") {
                while let Some(&b) = bytes.get(self.pos) {
                    if b == b'\n' {
                        break;
                    }
                    self.pos += 1;
                }
                continue;
            }
            return;
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Builds the standard "missing X found <Y>" error for `token`.
pub fn unexpected(what: &str, token: &Token<'_>) -> FormatError {
    FormatError::Unexpected {
        expected: what.to_string(),
        found: token.display_text().to_string(),
        line: token.line,
    }
}

fn run_len(bytes: &[u8], pred: impl Fn(&u8) -> bool) -> usize {
    bytes.iter().take_while(|b| pred(*b)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Scanner::new(src).map(|t| t.kind).collect()
    }

    #[test]
    fn test_numbers_and_words() {
        let tokens: Vec<_> = Scanner::new("0x1F -12 34 \\101 font_name2").collect();
        let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.text)).collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Hex, "0x1F"),
                (TokenKind::Integer, "-12"),
                (TokenKind::Integer, "34"),
                (TokenKind::Octal, "\\101"),
                (TokenKind::Word, "font_name2"),
            ]
        );
    }

    #[test]
    fn test_punctuation_and_specials() {
        assert_eq!(
            kinds("a[] = { 1, 2 };"),
            vec![
                TokenKind::Word,
                TokenKind::LeftBracket,
                TokenKind::Special,
                TokenKind::Special,
                TokenKind::LeftBrace,
                TokenKind::Integer,
                TokenKind::Special,
                TokenKind::Integer,
                TokenKind::RightBrace,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_line_comments_are_discarded() {
        let src = "#include <x.h>\n// note 0x10\nabc // trailing 0x20\n0x30";
        let tokens: Vec<_> = Scanner::new(src).collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "abc");
        assert_eq!(tokens[0].line, 3);
        assert_eq!(tokens[1].text, "0x30");
        assert_eq!(tokens[1].line, 4);
    }

    #[test]
    fn test_block_comment_markers_are_tokens() {
        assert_eq!(
            kinds("/* 65 A */ 0x01"),
            vec![
                TokenKind::CommentStart,
                TokenKind::Integer,
                TokenKind::Word,
                TokenKind::CommentEnd,
                TokenKind::Hex,
            ]
        );
    }

    #[test]
    fn test_skip_block_comment_reports_unterminated() {
        let mut scanner = Scanner::new("/* never\n closed");
        let open = scanner.next_token();
        assert_eq!(open.kind, TokenKind::CommentStart);
        let err = scanner.skip_block_comment(open.line).unwrap_err();
        assert_eq!(err, FormatError::UnterminatedComment { line: 1 });
    }

    #[test]
    fn test_byte_value_rejects_wide_literal() {
        let mut scanner = Scanner::new("\n0x1FF");
        let token = scanner.next_token();
        assert_eq!(token.hex_value().unwrap(), 0x1FF);
        assert_eq!(
            token.byte_value().unwrap_err(),
            FormatError::BadNumber {
                token: "0x1FF".to_string(),
                line: 2
            }
        );
    }

    #[test]
    fn test_int_value_overflow_is_bad_number() {
        let token = Scanner::new("99999999999999999999999").next_token();
        assert!(matches!(token.int_value(), Err(FormatError::BadNumber { .. })));
    }

    #[test]
    fn test_read_hex_until_skips_comments() {
        let mut scanner = Scanner::new("0x01, /* } 0x99 */ 0x02 }");
        let bytes = scanner
            .read_hex_until(TokenKind::RightBrace, true, "data")
            .unwrap();
        assert_eq!(bytes, vec![0x01, 0x02]);
    }

    #[test]
    fn test_read_hex_until_eof_is_truncated() {
        let mut scanner = Scanner::new("0x01, 0x02");
        let err = scanner
            .read_hex_until(TokenKind::Semicolon, false, "bitmap array")
            .unwrap_err();
        assert!(matches!(err, FormatError::Truncated { .. }));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut scanner = Scanner::new("abc 0x01");
        assert_eq!(scanner.peek().text, "abc");
        assert_eq!(scanner.next_token().text, "abc");
        assert_eq!(scanner.next_token().text, "0x01");
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_non_ascii_special_is_one_char() {
        let tokens: Vec<_> = Scanner::new("é0x01").collect();
        assert_eq!(tokens[0].kind, TokenKind::Special);
        assert_eq!(tokens[0].text, "é");
        assert_eq!(tokens[1].kind, TokenKind::Hex);
    }
}
