//! URL launching
//!
//! Opening a bookmark is fire-and-forget: the launcher hands the URL to the
//! system's default handler and returns immediately. Whether the handler starts,
//! runs or fails is never reported back to the caller.

/// Something that can open a URL
pub trait Launcher {
    /// Open `url` without waiting for the handler
    fn launch(&self, url: &str);
}

/// Opens URLs with the operating system's default application
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    /// Create a new system launcher
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, url: &str) {
        // Detached: the child is not waited on and spawn failures are dropped.
        let _ = open::that_detached(url);
    }
}

impl<L: Launcher + ?Sized> Launcher for &L {
    fn launch(&self, url: &str) {
        (**self).launch(url);
    }
}
