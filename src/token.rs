//! Tokens produced by the [`Scanner`](crate::scanner::Scanner).
//!
//! Only `!`, `?` and `.` are recognized; everything else is carried as an
//! opaque plain run.

use std::fmt;

/// The kind of a token, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Bang,
    BangBang,
    BangBangBang,
    Question,
    QuestionBang,
    Period,
    Dot,
    BangStr,
    Plain,
}

/// A scanned token. Only `Plain` and `BangStr` carry the text they matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `!`
    Bang,
    /// `!!`
    BangBang,
    /// `!!!`
    BangBangBang,
    /// `?`
    Question,
    /// `?!`, `??` and three-character runs starting with `?`
    QuestionBang,
    /// A `.` followed by a space or the end of input
    Period,
    /// A `.` inside a word, e.g. `3.14` or `u.s.a`
    Dot,
    /// Four or more intermixed `!`/`?`
    BangStr(String),
    /// Any run of text without bangers or dots
    Plain(String),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Bang => TokenKind::Bang,
            Token::BangBang => TokenKind::BangBang,
            Token::BangBangBang => TokenKind::BangBangBang,
            Token::Question => TokenKind::Question,
            Token::QuestionBang => TokenKind::QuestionBang,
            Token::Period => TokenKind::Period,
            Token::Dot => TokenKind::Dot,
            Token::BangStr(_) => TokenKind::BangStr,
            Token::Plain(_) => TokenKind::Plain,
        }
    }

    /// The matched text, for the kinds that keep it
    pub fn literal(&self) -> Option<&str> {
        match self {
            Token::BangStr(s) | Token::Plain(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Token::Plain(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Bang => write!(f, "!"),
            Token::BangBang => write!(f, "!!"),
            Token::BangBangBang => write!(f, "!!!"),
            Token::Question => write!(f, "?"),
            Token::QuestionBang => write!(f, "?!"),
            Token::Period | Token::Dot => write!(f, "."),
            Token::BangStr(s) | Token::Plain(s) => write!(f, "{}", s),
        }
    }
}
