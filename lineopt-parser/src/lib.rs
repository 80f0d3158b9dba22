#![no_std]

/*!
Low-level handling of a single command line of text. Takes care of splitting
the line into whitespace-delimited tokens, remembering where each one started,
and buffering tokens so that an option parser can push them back, set them
aside as positional candidates, or freeze the rest of the line as a verbatim
trailer. No knowledge of options or schemas lives here; usually this is too low
level to use directly.
*/

extern crate alloc;

mod error;
mod state;
mod token;
mod tokenizer;

pub use error::ArityError;
pub use state::ParseState;
pub use token::Token;
pub use tokenizer::Tokenizer;
