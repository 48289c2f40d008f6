//! Single-pass scanner splitting a phrase into punctuation and plain runs.

use tracing::debug;

use crate::token::Token;

/// Scans a phrase into [`Token`]s.
///
/// `start` marks the beginning of the token being scanned and `current` the
/// next unconsumed char. Lookahead never goes further than one char past
/// `current`, and the scanner never moves back past `start`.
pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Consume the whole source and return its tokens in order
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        debug!(
            "Scanned {} chars into {} tokens",
            self.source.len(),
            self.tokens.len()
        );
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '!' | '?' => self.banger(c == '?'),
            '.' => self.dot(),
            _ => self.plain(),
        }
    }

    /// A run of `!`/`?`. The first char decides between the bang and the
    /// question family; the run length picks the width.
    fn banger(&mut self, question: bool) {
        if !is_banger(self.peek()) {
            self.tokens
                .push(if question { Token::Question } else { Token::Bang });
            return;
        }

        self.advance();
        if !is_banger(self.peek()) {
            self.tokens.push(if question {
                Token::QuestionBang
            } else {
                Token::BangBang
            });
            return;
        }

        self.advance();
        if !is_banger(self.peek()) {
            self.tokens.push(if question {
                Token::QuestionBang
            } else {
                Token::BangBangBang
            });
            return;
        }

        // four or more: keep the whole run as typed
        while is_banger(self.peek()) {
            self.advance();
        }
        let text = self.lexeme();
        self.tokens.push(Token::BangStr(text));
    }

    /// A `.` ends a sentence when followed by a space or the end of input.
    /// The qualifying space belongs to the period.
    fn dot(&mut self) {
        if self.matches(' ') || self.is_at_end() {
            self.tokens.push(Token::Period);
        } else {
            self.tokens.push(Token::Dot);
        }
    }

    fn plain(&mut self) {
        while let Some(c) = self.peek() {
            if c == '!' || c == '?' || c == '.' {
                break;
            }
            self.advance();
        }

        let text = self.lexeme();
        self.tokens.push(Token::Plain(text));
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }
}

fn is_banger(c: Option<char>) -> bool {
    matches!(c, Some('!' | '?'))
}

/// Scan `source` into tokens
pub fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source).scan_tokens()
}
