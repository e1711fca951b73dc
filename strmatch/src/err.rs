use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    CompileRegexError(#[from] regex::Error),
    #[error(transparent)]
    FancyRegexError(#[from] fancy_regex::Error),
}
