//! One-shot startup sequence: register the stylesheet set in order,
//! then mount the root component and hand the instance back to the
//! caller.
//!
//! The sequence is linear and runs once per call. It is not a
//! singleton guard: bootstrapping twice against the same environment
//! mounts two independent instances.

use thiserror::Error;

use crate::assets::StyleAsset;

/// Failures along the bootstrap path. All are fatal at this layer;
/// the caller decides whether to abort.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootError {
    #[error("document is not available")]
    NoDocument,
    #[error("document has no <head> to register styles in")]
    NoHead,
    #[error("failed to register stylesheet `{name}`")]
    StyleRegistration { name: &'static str },
    #[error("no element with id `{0}` in the document")]
    MissingMountTarget(String),
}

/// The environment the bootstrapper runs against: something that can
/// register a stylesheet and attach the root component under an
/// element found by id.
///
/// The browser implementation lives in [`crate::dom::DomEnv`]; tests
/// substitute an in-memory fake.
pub trait MountEnv {
    /// Handle to one mounted root component.
    type Instance;

    /// Append one stylesheet. Later registrations take precedence on
    /// cascade ties, so call order is meaningful.
    fn register_style(&mut self, asset: &StyleAsset) -> Result<(), BootError>;

    /// Resolve the element with the given id (first match wins) and
    /// mount the root component under it.
    fn mount_root(&mut self, mount_id: &str) -> Result<Self::Instance, BootError>;
}

/// Run the startup sequence: every asset in slice order, then the
/// mount. Returns the instance handle, owned by the caller.
pub fn bootstrap<E: MountEnv>(
    env: &mut E,
    assets: &[StyleAsset],
    mount_id: &str,
) -> Result<E::Instance, BootError> {
    for asset in assets {
        env.register_style(asset)?;
    }
    env.mount_root(mount_id)
}
