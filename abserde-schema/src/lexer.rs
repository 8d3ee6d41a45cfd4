//! Tokenizer for the record IDL.
//!
//! Whitespace and newlines are insignificant. `//` and `#` start comments
//! running to the end of the line. String and number literals only occur in
//! method bodies, which the parser skips, but they are tokenized so that a
//! brace inside a string cannot unbalance a body.

use crate::ast::Span;
use crate::error::ParseError;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword.
    Ident(String),
    /// Numeric literal, kept as written.
    Number(String),
    /// String literal contents, escapes left as written.
    Str(String),
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Any other ASCII punctuation character.
    Punct(char),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(s) | Self::Number(s) => f.write_str(s),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Colon => f.write_str(":"),
            Self::Comma => f.write_str(","),
            Self::Semicolon => f.write_str(";"),
            Self::LBrace => f.write_str("{"),
            Self::RBrace => f.write_str("}"),
            Self::LBracket => f.write_str("["),
            Self::RBracket => f.write_str("]"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Punct(c) => write!(f, "{c}"),
        }
    }
}

/// Token with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Position of the first character.
    pub span: Span,
}

impl Token {
    /// Returns the identifier text if this token is an identifier.
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this token is the given identifier.
    #[must_use]
    pub fn is_ident(&self, word: &str) -> bool {
        self.ident() == Some(word)
    }
}

/// Tokenizes IDL source text.
///
/// # Errors
/// Returns `ParseError` on a character that starts no token or on an
/// unterminated string literal.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_line(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn take_while(&mut self, first: char, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::from(first);
        while let Some(&c) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            text.push(c);
            self.bump();
        }
        text
    }

    fn string(&mut self, span: Span) -> Result<TokenKind, ParseError> {
        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(TokenKind::Str(text)),
                Some('\\') => {
                    text.push('\\');
                    match self.bump() {
                        Some(c) => text.push(c),
                        None => return Err(ParseError::UnterminatedString { span }),
                    }
                }
                Some(c) => text.push(c),
                None => return Err(ParseError::UnterminatedString { span }),
            }
        }
    }

    fn run(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();

        loop {
            let span = self.span();
            let Some(c) = self.bump() else {
                break;
            };

            let kind = match c {
                c if c.is_whitespace() => continue,
                '#' => {
                    self.skip_line();
                    continue;
                }
                '/' if self.chars.peek() == Some(&'/') => {
                    self.skip_line();
                    continue;
                }
                ':' => TokenKind::Colon,
                ',' => TokenKind::Comma,
                ';' => TokenKind::Semicolon,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '[' => TokenKind::LBracket,
                ']' => TokenKind::RBracket,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '"' => self.string(span)?,
                c if c.is_ascii_alphabetic() || c == '_' => {
                    TokenKind::Ident(self.take_while(c, |c| c.is_ascii_alphanumeric() || c == '_'))
                }
                c if c.is_ascii_digit() => TokenKind::Number(
                    self.take_while(c, |c| c.is_ascii_alphanumeric() || c == '.' || c == '_'),
                ),
                c if c.is_ascii_punctuation() => TokenKind::Punct(c),
                ch => return Err(ParseError::UnexpectedChar { ch, span }),
            };

            tokens.push(Token { kind, span });
        }

        Ok(tokens)
    }
}
