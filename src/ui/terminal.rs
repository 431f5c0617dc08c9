//! Terminal setup that cannot leave the user's shell in raw mode.

use std::io;

/// Run `setup`; if it fails, run `restore` before handing back the error.
pub fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|err| {
        tracing::error!(%err, "terminal setup failed, restoring");
        restore();
    })
}
