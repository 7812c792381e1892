use super::error::StripFilterError;
use globset::{Glob, GlobMatcher};

/// One `(glob, isInclude)` rule plus its compiled matcher. The matcher is
/// treated as an opaque `matches(path) -> bool` primitive; its syntax
/// (`?` one char, `*` one segment, `**` any number of segments) is not
/// re-specified here.
#[derive(Debug, Clone)]
pub struct Pattern {
    glob: String,
    is_include: bool,
    matcher: GlobMatcher,
}

impl Pattern {
    pub fn new(glob: impl Into<String>, is_include: bool) -> Result<Self, StripFilterError> {
        let glob = glob.into();
        let matcher = Glob::new(&glob)
            .map_err(|source| StripFilterError::InvalidGlob {
                pattern: glob.clone(),
                source,
            })?
            .compile_matcher();
        Ok(Self {
            glob,
            is_include,
            matcher,
        })
    }

    pub fn glob(&self) -> &str {
        &self.glob
    }

    pub fn is_include(&self) -> bool {
        self.is_include
    }

    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}
