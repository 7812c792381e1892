use super::pattern::Pattern;

/// An ordered, immutable sequence of patterns produced by
/// [`super::builder::StripArchivesBuilder::build`]. Every possible path
/// matches at least one pattern, because the builder always appends the two
/// terminal patterns: exclude `**/*.class`, then include `**/*`.
#[derive(Debug, Clone)]
pub struct StripArchivesConfig {
    patterns: Vec<Pattern>,
}

impl StripArchivesConfig {
    pub(super) fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Walk the pattern sequence in order; return the `isInclude` flag of
    /// the first pattern whose matcher accepts `path`. Always returns a
    /// defined answer — the terminal `**/*` include guarantees termination.
    pub fn should_include(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .find(|p| p.matches(path))
            .map(|p| p.is_include())
            .unwrap_or(true)
    }
}
