//! Scanner for C++, Java and Python flavoured source text.
//!
//! [`tokenize`] turns a whole buffer into an ordered token stream plus a
//! list of lexical errors. It knows nothing about which grammar the text is
//! written in; language detection consumes its output.
//!
//! ```text
//! text ──► tokenize() ──► LexOutput { tokens, errors }
//! ```

mod cursor;
mod keywords;
mod lex_error;
mod position;
mod scanner;
mod stats;
mod token;

pub use cursor::Cursor;
pub use keywords::is_keyword;
pub use lex_error::{LexError, LexErrorKind};
pub use position::Position;
pub use scanner::{tokenize, LexOutput};
pub use stats::TokenStats;
pub use token::{Token, TokenKind};
