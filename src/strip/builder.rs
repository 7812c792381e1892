use super::config::StripArchivesConfig;
use super::error::StripFilterError;
use super::pattern::Pattern;

const TERMINAL_EXCLUDE_CLASS: &str = "**/*.class";
const TERMINAL_INCLUDE_ALL: &str = "**/*";

/// Accumulates include/exclude patterns in the order added. Single-use:
/// once [`build`](Self::build) succeeds, further `add_include`/`add_exclude`
/// calls fail with [`StripFilterError::BuilderAlreadyBuilt`] rather than
/// silently mutating a config someone may already be holding.
///
/// A consuming (move-based) builder would make reuse a compile error
/// instead, but the spec's reuse scenario requires a *runtime*,
/// programmer-visible failure, so this uses a `built` flag rather than
/// consuming `self` in `build`.
#[derive(Debug, Default)]
pub struct StripArchivesBuilder {
    patterns: Vec<Pattern>,
    built: bool,
}

impl StripArchivesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_include<I, S>(&mut self, globs: I) -> Result<&mut Self, StripFilterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(globs, true)
    }

    pub fn add_exclude<I, S>(&mut self, globs: I) -> Result<&mut Self, StripFilterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(globs, false)
    }

    fn push<I, S>(&mut self, globs: I, is_include: bool) -> Result<&mut Self, StripFilterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.built {
            return Err(StripFilterError::BuilderAlreadyBuilt);
        }
        for glob in globs {
            self.patterns.push(Pattern::new(glob.into(), is_include)?);
        }
        Ok(self)
    }

    /// Append the two terminal patterns and return an immutable config.
    /// The builder is marked built; this instance may no longer be mutated.
    pub fn build(&mut self) -> Result<StripArchivesConfig, StripFilterError> {
        if self.built {
            return Err(StripFilterError::BuilderAlreadyBuilt);
        }
        self.built = true;

        let mut patterns = self.patterns.clone();
        patterns.push(Pattern::new(TERMINAL_EXCLUDE_CLASS, false)?);
        patterns.push(Pattern::new(TERMINAL_INCLUDE_ALL, true)?);
        Ok(StripArchivesConfig::new(patterns))
    }
}
