use std::borrow::Cow;

use fancy_regex::Regex;

use super::{Matcher, Pattern};
use crate::Result;

impl Matcher for Regex {
    fn search<'h>(&self, haystack: &'h str) -> Result<Option<Vec<Option<&'h str>>>> {
        Ok(self
            .captures(haystack)?
            .map(|caps| caps.iter().map(|m| m.map(|m| m.as_str())).collect()))
    }
}

impl Pattern for Regex {
    type Engine = Regex;

    fn compile(&self) -> Result<Cow<'_, Regex>> {
        Ok(Cow::Borrowed(self))
    }
}
