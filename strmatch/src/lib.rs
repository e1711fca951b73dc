//! Pull the first match of a regular expression out of a string, together
//! with every capturing group that took part in it.
//!
//! ```
//! use strmatch::ExtractMatches;
//!
//! let found = "2011-10-25".extract_matches(r"(\d+)-(\d+)-(\d+)").unwrap();
//! assert_eq!(found.unwrap(), ["2011-10-25", "2011", "10", "25"]);
//!
//! assert!("hello".extract_matches("xyz").unwrap().is_none());
//! ```

mod err;
mod extract;
pub mod matcher;

pub use err::Error;
pub use extract::{extract_matches, ExtractMatches, MatchList};
pub use matcher::{Matcher, Pattern};

pub type Result<T> = std::result::Result<T, Error>;
