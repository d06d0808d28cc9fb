pub const APP_NAME: &str = "Home Value Scanner";
pub const APP_AUTHOR: &str = "SetScallywag";
pub const APP_REPO_URL: &str = "https://github.com/skynatbs/home_value_scanner";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Display label for the about section: the release tag when the binary was
/// built from one, the crate version otherwise.
pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{APP_VERSION}")
    }
}
