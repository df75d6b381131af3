use serde::Serialize;
use tracing::{debug, warn};

/// A document that can have the content of one of its elements replaced.
pub trait HostPage {
    /// Replace everything inside the element with `id` by `markup`.
    ///
    /// Returns `false`, leaving the page untouched, when no such element exists.
    fn replace_content(&mut self, id: &str, markup: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MountOutcome {
    Mounted,
    ContainerMissing,
}

/// Inject `markup` into the container `container_id` of `host`.
///
/// A missing container is not an error: nothing is written and
/// `ContainerMissing` is returned.
pub fn mount<H: HostPage + ?Sized>(host: &mut H, container_id: &str, markup: &str) -> MountOutcome {
    if host.replace_content(container_id, markup) {
        debug!(container = container_id, bytes = markup.len(), "markup mounted");
        MountOutcome::Mounted
    } else {
        warn!(container = container_id, "container not found, nothing mounted");
        MountOutcome::ContainerMissing
    }
}
