//! Shared constants for the Vigil issue index feed.

/// Vigil version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of issue keys a single scroll may filter on.
///
/// Hard ceiling inherited from the SQL driver's per-statement parameter
/// limit. Callers with more keys must split them into smaller chunks and
/// scroll each chunk separately.
pub const MAX_ISSUE_KEYS_PER_SCROLL: usize = 1000;

/// Default log filter when `VIGIL_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "vigil=info";

/// Default location of the Vigil database, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = ".vigil/vigil.db";
