/*! Token filtering utilities

Filters decide which tokens survive into frequency counting.

Filters implement [filter::Filter]: a pure predicate where `detect`
returning `true` means *keep the token*. Stateless by construction, so the
same filter can be applied to any number of token streams.
!*/
mod filter;
mod stopwords;
mod token;

pub use filter::Filter;
pub use stopwords::Stopwords;
pub use token::Length;
pub use token::Numeric;
