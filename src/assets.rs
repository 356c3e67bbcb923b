//! The static asset set registered at startup.
//!
//! Registration order is the contract: later styles win on cascade
//! ties, so the theme's design tokens go in first, the base rules that
//! consume them second, and the application stylesheet last with the
//! highest precedence.

/// Identifier of the element the root component mounts under.
pub const MOUNT_ID: &str = "app";

/// One named style resource with its CSS embedded at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleAsset {
    pub name: &'static str,
    pub css: &'static str,
}

/// The stylesheet set in registration order: theme, base, app.
pub fn default_assets() -> [StyleAsset; 3] {
    [
        StyleAsset {
            name: "theme-crimson",
            css: include_str!("../styles/theme-crimson.css"),
        },
        StyleAsset {
            name: "base",
            css: include_str!("../styles/base.css"),
        },
        StyleAsset {
            name: "app",
            css: include_str!("../styles/app.css"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assets_order() {
        let assets = default_assets();
        let names: Vec<_> = assets.iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            vec!["theme-crimson", "base", "app"],
            "cascade order must be theme, then base, then app"
        );
    }

    #[test]
    fn test_default_assets_are_nonempty() {
        for asset in default_assets() {
            assert!(
                !asset.css.trim().is_empty(),
                "stylesheet `{}` should carry rules",
                asset.name
            );
        }
    }

    #[test]
    fn test_mount_id_is_app() {
        assert_eq!(MOUNT_ID, "app");
    }
}
