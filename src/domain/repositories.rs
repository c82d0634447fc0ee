//! Repository abstraction over the local preference store.
//!
//! The durable state of the application is three small records: the account
//! registry, the session pointer, and the preferred language code. They live
//! behind this trait so the flat JSON-file implementation can be swapped for
//! a real store without touching the auth or i18n code.

use crate::domain::user::{SessionUser, User};
use anyhow::Result;

/// Durable key-value style storage for accounts and UI preferences.
///
/// All operations are synchronous local I/O; there is no concurrent-writer
/// protection because only one session exists per data directory.
pub trait PreferenceStore: Send + Sync {
    /// The full list of registered accounts. Missing storage reads as empty.
    fn load_registry(&self) -> Result<Vec<User>>;

    fn save_registry(&self, users: &[User]) -> Result<()>;

    /// The persisted session pointer, if any. Implementations discard (and
    /// clean up) an unreadable session record instead of failing.
    fn load_session(&self) -> Result<Option<SessionUser>>;

    fn save_session(&self, user: &SessionUser) -> Result<()>;

    fn clear_session(&self) -> Result<()>;

    /// The persisted UI language code, if any. Validation against the
    /// supported set is the i18n service's job, not the store's.
    fn load_language(&self) -> Result<Option<String>>;

    fn save_language(&self, code: &str) -> Result<()>;
}
