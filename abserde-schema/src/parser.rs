//! Record IDL parser.
//!
//! This module turns IDL source text into the syntax tree of [`crate::ast`].
//!
//! ```text
//! file     := item*
//! item     := "record" IDENT "{" member* "}"
//!           | IDENT IDENT group* "{" balanced "}"
//!           | IDENT balanced ";"
//! member   := IDENT ":" type [ "," | ";" ]
//!           | "fn" IDENT balanced ( "{" balanced "}" | ";" )
//! type     := IDENT [ "[" [ type { "," type } [ "," ] ] "]" ]
//! group    := "(" balanced ")" | "[" balanced "]" | other token
//! ```

use crate::ast::{
    FieldDecl, Item, Member, MethodDecl, OpaqueDecl, RecordDecl, SourceFile, Span, Statement,
    TypeExpr,
};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind, tokenize};
use tracing::trace;

/// Keyword marking a declaration as a compiled record.
pub const RECORD_MARKER: &str = "record";

/// Parses IDL source text into a syntax tree.
///
/// # Arguments
/// * `source` - IDL source text
///
/// # Returns
/// Parsed source file or parse error.
///
/// # Errors
/// Returns `ParseError` if the text is not valid IDL or a record body contains
/// something other than fields and methods.
pub fn parse_source(source: &str) -> Result<SourceFile, ParseError> {
    let tokens = tokenize(source)?;
    Parser::new(tokens).parse_file()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind_at(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| &t.kind)
    }

    fn next(&mut self, expected: &str) -> Result<Token, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| ParseError::eof(expected))?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<Token, ParseError> {
        let token = self.next(expected)?;
        if &token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::unexpected(expected, token.kind.to_string(), token.span))
        }
    }

    fn expect_ident(&mut self, expected: &str) -> Result<(String, Span), ParseError> {
        let token = self.next(expected)?;
        match token.kind {
            TokenKind::Ident(name) => Ok((name, token.span)),
            other => Err(ParseError::unexpected(expected, other.to_string(), token.span)),
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_file(&mut self) -> Result<SourceFile, ParseError> {
        let mut file = SourceFile::default();
        while self.peek().is_some() {
            file.items.push(self.parse_item()?);
        }
        Ok(file)
    }

    fn parse_item(&mut self) -> Result<Item, ParseError> {
        let token = self.next("a declaration")?;
        let Some(keyword) = token.ident().map(str::to_string) else {
            return Err(ParseError::unexpected(
                "a declaration",
                token.kind.to_string(),
                token.span,
            ));
        };

        if keyword == RECORD_MARKER {
            return self.parse_record().map(Item::Record);
        }

        if let Some(TokenKind::Ident(name)) = self.peek_kind_at(0) {
            let name = name.clone();
            self.pos += 1;
            return self.parse_unmarked(keyword, name, token.span);
        }

        self.skip_until_semicolon()?;
        Ok(Item::Statement(Statement {
            keyword,
            span: token.span,
        }))
    }

    /// Skips an unmarked `keyword name ...` item.
    ///
    /// Parenthesised and bracketed groups before the body are skipped. A braced
    /// body makes the item a declaration; reaching `;` first makes it a statement.
    fn parse_unmarked(
        &mut self,
        keyword: String,
        name: String,
        span: Span,
    ) -> Result<Item, ParseError> {
        loop {
            let token = self.next("'{' or ';'")?;
            match token.kind {
                TokenKind::LBrace => {
                    self.skip_group(&token)?;
                    self.eat(&TokenKind::Semicolon);
                    trace!(keyword = %keyword, name = %name, "parsed unmarked declaration");
                    return Ok(Item::Declaration(OpaqueDecl {
                        keyword,
                        name,
                        span,
                    }));
                }
                TokenKind::Semicolon => return Ok(Item::Statement(Statement { keyword, span })),
                TokenKind::LParen | TokenKind::LBracket => self.skip_group(&token)?,
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => {
                    return Err(ParseError::unexpected(
                        "'{' or ';'",
                        token.kind.to_string(),
                        token.span,
                    ));
                }
                _ => {}
            }
        }
    }

    fn parse_record(&mut self) -> Result<RecordDecl, ParseError> {
        let (name, span) = self.expect_ident("a record name")?;
        self.expect(&TokenKind::LBrace, "'{' after record name")?;

        let mut members = Vec::new();
        loop {
            let Some(token) = self.peek().cloned() else {
                return Err(ParseError::eof(format!("'}}' closing record '{name}'")));
            };
            match &token.kind {
                TokenKind::RBrace => {
                    self.pos += 1;
                    break;
                }
                TokenKind::Ident(word)
                    if word == "fn"
                        && matches!(self.peek_kind_at(1), Some(TokenKind::Ident(_))) =>
                {
                    members.push(Member::Method(self.parse_method()?));
                }
                TokenKind::Ident(field)
                    if matches!(self.peek_kind_at(1), Some(TokenKind::Colon)) =>
                {
                    let field = field.clone();
                    self.pos += 2;
                    let ty = self.parse_type()?;
                    if !self.eat(&TokenKind::Comma) {
                        self.eat(&TokenKind::Semicolon);
                    }
                    members.push(Member::Field(FieldDecl {
                        name: field,
                        ty,
                        span: token.span,
                    }));
                }
                other => {
                    return Err(ParseError::MalformedMember {
                        record: name,
                        found: other.to_string(),
                        span: token.span,
                    });
                }
            }
        }

        Ok(RecordDecl {
            name,
            members,
            span,
        })
    }

    fn parse_method(&mut self) -> Result<MethodDecl, ParseError> {
        let fn_token = self.next("'fn'")?;
        let (name, _) = self.expect_ident("a method name")?;

        loop {
            let token = self.next(&format!("a body for method '{name}'"))?;
            match token.kind {
                TokenKind::LBrace => {
                    self.skip_group(&token)?;
                    break;
                }
                TokenKind::Semicolon => break,
                TokenKind::LParen | TokenKind::LBracket => self.skip_group(&token)?,
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => {
                    return Err(ParseError::unexpected(
                        format!("a body for method '{name}'"),
                        token.kind.to_string(),
                        token.span,
                    ));
                }
                _ => {}
            }
        }

        Ok(MethodDecl {
            name,
            span: fn_token.span,
        })
    }

    fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        let (name, span) = self.expect_ident("a type")?;
        if !self.eat(&TokenKind::LBracket) {
            return Ok(TypeExpr::Name { name, span });
        }

        let mut args = Vec::new();
        loop {
            if self.eat(&TokenKind::RBracket) {
                break;
            }
            args.push(self.parse_type()?);
            if self.eat(&TokenKind::Comma) {
                continue;
            }
            self.expect(&TokenKind::RBracket, "',' or ']' in type arguments")?;
            break;
        }

        Ok(TypeExpr::Generic { name, args, span })
    }

    /// Consumes tokens up to and including the delimiter closing `open`.
    fn skip_group(&mut self, open: &Token) -> Result<(), ParseError> {
        let mut stack = vec![closing(&open.kind)];
        while let Some(&expected) = stack.last() {
            let token = self.next(&format!("'{expected}' matching {}", open.span))?;
            match token.kind {
                TokenKind::LBrace | TokenKind::LBracket | TokenKind::LParen => {
                    stack.push(closing(&token.kind));
                }
                TokenKind::RBrace | TokenKind::RBracket | TokenKind::RParen => {
                    if token.kind == TokenKind::from_closer(expected) {
                        stack.pop();
                    } else {
                        return Err(ParseError::unexpected(
                            format!("'{expected}'"),
                            token.kind.to_string(),
                            token.span,
                        ));
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn skip_until_semicolon(&mut self) -> Result<(), ParseError> {
        loop {
            let token = self.next("';'")?;
            match token.kind {
                TokenKind::Semicolon => return Ok(()),
                TokenKind::LBrace | TokenKind::LBracket | TokenKind::LParen => {
                    self.skip_group(&token)?;
                }
                TokenKind::RBrace | TokenKind::RBracket | TokenKind::RParen => {
                    return Err(ParseError::unexpected(
                        "';'",
                        token.kind.to_string(),
                        token.span,
                    ));
                }
                _ => {}
            }
        }
    }
}

fn closing(open: &TokenKind) -> char {
    match open {
        TokenKind::LBracket => ']',
        TokenKind::LParen => ')',
        _ => '}',
    }
}

impl TokenKind {
    fn from_closer(c: char) -> Self {
        match c {
            ']' => Self::RBracket,
            ')' => Self::RParen,
            _ => Self::RBrace,
        }
    }
}
