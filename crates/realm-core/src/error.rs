use std::path::PathBuf;

/// Alias for `Result<T, RealmError>`.
pub type RealmResult<T> = Result<T, RealmError>;

/// Errors raised at the edges of the realm: parsing armaments and loading
/// configuration. Dispatching techniques and alarms never fails.
#[derive(Debug, thiserror::Error)]
pub enum RealmError {
    /// The barracks does not know how to arm a warrior with this weapon.
    #[error("unknown armament: \"{0}\" (expected sword or spear)")]
    UnknownArmament(String),

    /// A configuration file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration document was not valid JSON for [`crate::RealmConfig`].
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
