// Matcher module: scores catalog vehicles against a quiz answer and picks the shortlist.

pub mod lookup;
pub mod ranking;
pub mod scoring;
pub mod tiebreak;

pub use ranking::{Matcher, MatcherImpl};
