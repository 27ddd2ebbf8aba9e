use crate::error::StatError;
use crate::sandbox::SandboxRoot;
use crate::stat::BasicStat;

/// Lazily resolves names against a [`SandboxRoot`], one per `next()` call
///
/// Yields exactly one result per name, in input order. Nothing is resolved
/// until it is asked for, so dropping the stream part way through leaves the
/// remaining names untouched.
pub struct StatStream<'r, I> {
    root: &'r SandboxRoot,
    names: I,
}

impl<'r, I> StatStream<'r, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new(root: &'r SandboxRoot, names: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            root,
            names: names.into_iter(),
        }
    }

    /// Resolve every remaining name, failing on the first error
    pub fn collect_stats(self) -> Result<Vec<BasicStat>, StatError> {
        self.collect()
    }
}

impl<I> Iterator for StatStream<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<BasicStat, StatError>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.next()?;
        Some(self.root.resolve(name.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl SandboxRoot {
    /// Stream stats for `names` through this root
    pub fn stats<I>(&self, names: I) -> StatStream<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        StatStream::new(self, names)
    }
}
