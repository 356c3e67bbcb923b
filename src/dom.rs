//! Browser implementation of the mount environment.
//!
//! Styles are registered by appending `<style>` elements to `<head>`,
//! so document order matches registration order and the cascade
//! tie-break falls out of it. The root component is mounted with
//! `leptos::mount::mount_to` and the unmount handle is leaked: the
//! instance lives until the page itself is torn down.

use leptos::prelude::IntoView;
use wasm_bindgen::JsCast;

use crate::assets::StyleAsset;
use crate::boot::{BootError, MountEnv};

/// Handle to one mounted root component. Each bootstrap yields a
/// distinct instance; holding it lets the caller observe which mount
/// point the component is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInstance {
    mount_id: String,
    serial: u32,
}

impl AppInstance {
    /// Identifier of the element this instance is mounted under.
    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Whether the instance is attached to the live document. Always
    /// true here: the mount is never explicitly torn down.
    pub fn is_live(&self) -> bool {
        true
    }
}

/// Mount environment over the live browser document, parameterized by
/// the root-component constructor.
pub struct DomEnv<F> {
    root: F,
    mounted: u32,
}

impl<F, V> DomEnv<F>
where
    F: Fn() -> V + Clone + 'static,
    V: IntoView + 'static,
{
    pub fn new(root: F) -> Self {
        Self { root, mounted: 0 }
    }

    fn document() -> Result<web_sys::Document, BootError> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or(BootError::NoDocument)
    }
}

impl<F, V> MountEnv for DomEnv<F>
where
    F: Fn() -> V + Clone + 'static,
    V: IntoView + 'static,
{
    type Instance = AppInstance;

    fn register_style(&mut self, asset: &StyleAsset) -> Result<(), BootError> {
        let doc = Self::document()?;
        let head = doc.head().ok_or(BootError::NoHead)?;
        let style = doc
            .create_element("style")
            .map_err(|_| BootError::StyleRegistration { name: asset.name })?;
        style
            .set_attribute("data-asset", asset.name)
            .map_err(|_| BootError::StyleRegistration { name: asset.name })?;
        style.set_text_content(Some(asset.css));
        head.append_child(&style)
            .map_err(|_| BootError::StyleRegistration { name: asset.name })?;
        Ok(())
    }

    fn mount_root(&mut self, mount_id: &str) -> Result<AppInstance, BootError> {
        let doc = Self::document()?;
        // getElementById: first match wins if the id is duplicated.
        let target = doc
            .get_element_by_id(mount_id)
            .ok_or_else(|| BootError::MissingMountTarget(mount_id.to_string()))?
            .unchecked_into::<web_sys::HtmlElement>();

        leptos::mount::mount_to(target, self.root.clone()).forget();

        self.mounted += 1;
        Ok(AppInstance {
            mount_id: mount_id.to_string(),
            serial: self.mounted,
        })
    }
}
