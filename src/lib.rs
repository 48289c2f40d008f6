//! Rant: rewrites short phrases into an emphatic, emoji-laden rant.
//!
//! A phrase is scanned into punctuation and plain runs, plain runs are
//! upper-cased, and every sentence end is amplified and followed by an angry
//! emoji. Emojis cycle through a shuffled pool so a rant rarely repeats one
//! back to back.
//!
//! ```
//! let out = rant::rant("this is fine");
//! assert!(out.starts_with("THIS IS FINE!!! "));
//! ```

pub mod announce;
pub mod config;
pub mod error;
pub mod rager;
pub mod random;
pub mod ranter;
pub mod scanner;
pub mod stream;
pub mod token;
pub mod wire;

pub use config::Config;
pub use error::{RantError, Result};
pub use rager::{EmojiPool, Rager};
pub use random::{RandomSource, SharedRandom};
pub use ranter::{rant, Ranter};
pub use scanner::{scan, Scanner};
pub use stream::{RantStream, StreamMode, StreamResult};
pub use token::{Token, TokenKind};
