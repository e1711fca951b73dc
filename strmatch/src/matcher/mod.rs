pub(crate) mod fancy;
pub(crate) mod reg;

use std::borrow::Cow;

use crate::Result;

/// A regular-expression engine able to find the first match in a haystack.
pub trait Matcher {
    /// Searches `haystack` from its start for the leftmost match.
    ///
    /// Slot 0 holds the overall match and slot `i` the `i`-th capturing
    /// group, `None` when that group did not participate.
    fn search<'h>(&self, haystack: &'h str) -> Result<Option<Vec<Option<&'h str>>>>;
}

/// Something that is, or can be compiled into, a [`Matcher`].
pub trait Pattern {
    type Engine: Matcher + Clone + 'static;

    fn compile(&self) -> Result<Cow<'_, Self::Engine>>;
}

impl<P: Pattern + ?Sized> Pattern for &P {
    type Engine = P::Engine;

    fn compile(&self) -> Result<Cow<'_, Self::Engine>> {
        (**self).compile()
    }
}
