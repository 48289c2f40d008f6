//! Folds scanned tokens into a rant.

use tracing::debug;

use crate::rager::{EmojiPool, Rager};
use crate::random::{RandomSource, SharedRandom};
use crate::scanner::scan;
use crate::token::Token;

/// Marker written for sentence ends and every kind of bang
const BANG_MARKER: &str = "!!!";

/// Marker written for every kind of question
const QUESTION_MARKER: &str = "?!";

/// Turns phrases into rants using one emoji pool.
///
/// Every call gets its own [`Rager`], so emoji fairness holds per rant and
/// nothing is shared between calls except the random source.
#[derive(Debug, Clone, Default)]
pub struct Ranter {
    pool: EmojiPool,
}

impl Ranter {
    pub fn new(pool: EmojiPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &EmojiPool {
        &self.pool
    }

    /// Rant using the process-wide random source
    pub fn rant(&self, input: &str) -> String {
        self.rant_with(input, SharedRandom)
    }

    /// Rant drawing emojis through `source`
    pub fn rant_with<S: RandomSource>(&self, input: &str, source: S) -> String {
        let mut tokens = scan(input);

        match tokens.last() {
            None => return String::new(),
            // always end on a bang
            Some(last) if last.is_plain() => tokens.push(Token::Bang),
            Some(_) => {}
        }

        let mut rager = Rager::new(&self.pool, source);
        let mut out = String::with_capacity(input.len() * 2);

        for token in &tokens {
            match token {
                Token::Plain(text) => out.push_str(&text.to_uppercase()),
                Token::Dot => out.push('.'),
                Token::Period | Token::Bang | Token::BangBang | Token::BangBangBang => {
                    push_outburst(&mut out, BANG_MARKER, rager.draw());
                }
                Token::Question | Token::QuestionBang => {
                    push_outburst(&mut out, QUESTION_MARKER, rager.draw());
                }
                Token::BangStr(run) => push_outburst(&mut out, run, rager.draw()),
            }
        }

        debug!("Ranted {} tokens into {} bytes", tokens.len(), out.len());
        out
    }
}

fn push_outburst(out: &mut String, marker: &str, emoji: &str) {
    out.push_str(marker);
    out.push(' ');
    out.push_str(emoji);
    out.push(' ');
}

/// Rant with the default emoji pool
pub fn rant(input: &str) -> String {
    Ranter::default().rant(input)
}
