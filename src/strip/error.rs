use thiserror::Error;

/// The narrow error taxonomy for the archive strip filter: a misused
/// single-use builder, or a glob pattern that doesn't compile.
#[derive(Debug, Error)]
pub enum StripFilterError {
    #[error("StripArchivesBuilder::build() was already called; no further patterns can be added")]
    BuilderAlreadyBuilt,

    #[error("invalid glob pattern {pattern:?}: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
