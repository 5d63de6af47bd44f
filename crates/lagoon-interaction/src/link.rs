//! Link-opening collaborator.

use tracing::{info, warn};

/// Opens URLs from rendered link segments.
///
/// Activation first asks whether the URL is openable; failures are
/// logged, never raised.
pub trait LinkOpener: Send + Sync {
    fn can_open(&self, url: &str) -> bool;
    fn open(&self, url: &str);
}

/// Activates a link: open when possible, otherwise log and move on.
pub fn activate_link(opener: &dyn LinkOpener, url: &str) {
    if opener.can_open(url) {
        opener.open(url);
    } else {
        warn!(url, "cannot open link");
    }
}

/// Terminal link opener: accepts web schemes and prints the URL for the
/// user to follow, since the chat runs in a terminal.
#[derive(Debug, Default)]
pub struct TerminalLinkOpener;

impl LinkOpener for TerminalLinkOpener {
    fn can_open(&self, url: &str) -> bool {
        url.starts_with("https://") || url.starts_with("http://")
    }

    fn open(&self, url: &str) {
        info!(url, "opening link");
        println!("  -> {url}");
    }
}
