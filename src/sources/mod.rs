/*! Token sources

Collaborators that materialize a finite token sequence for the analysis
core. Anything able to yield tokens implements [TokenSource]; the analysis
pipelines are generic over it.
!*/
mod phrases;
mod text;

pub use phrases::{pick, PHRASES};
pub use text::{tokenize, TextFile};

use crate::error::Error;

/// a finite producer of string tokens.
pub trait TokenSource {
    fn tokens(&self) -> Result<Vec<String>, Error>;
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
    fn tokens(&self) -> Result<Vec<String>, Error> {
        (**self).tokens()
    }
}
