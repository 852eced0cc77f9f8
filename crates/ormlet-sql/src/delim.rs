use std::fmt;

/// Comma delimited
pub(crate) struct Comma<'a, T>(pub(crate) &'a [T]);

/// Delimited by an arbitrary separator
pub(crate) struct Delimited<'a, T>(pub(crate) &'a [T], pub(crate) &'static str);

impl<T: fmt::Display> fmt::Display for Comma<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Delimited(self.0, ", ").fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Delimited<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for item in self.0 {
            write!(f, "{s}{item}")?;
            s = self.1;
        }
        Ok(())
    }
}
