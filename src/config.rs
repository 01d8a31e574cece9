use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    endpoint::EndpointUrl,
    error::{Error, Result},
};

/// Client identifier sent as the `context` query parameter on page URLs.
pub const CONTEXT: &str = "fx_ios_v1";

/// The endpoints of a Firefox Accounts deployment.
///
/// The first three URLs are API bases, the last three are pages opened in a
/// browser and carry the [CONTEXT] parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointConfig {
    label: String,
    auth_server_url: EndpointUrl,
    oauth_server_url: EndpointUrl,
    profile_server_url: EndpointUrl,
    sign_in_url: EndpointUrl,
    settings_url: EndpointUrl,
    force_auth_url: EndpointUrl,
}

impl EndpointConfig {
    /// Validate the given URLs and build a configuration from them.
    ///
    /// Page URLs are used as given; pass them through [append_context_param]
    /// beforehand if they should carry the context tag.
    pub fn new(
        label: impl Into<String>,
        auth_server_url: &str,
        oauth_server_url: &str,
        profile_server_url: &str,
        sign_in_url: &str,
        settings_url: &str,
        force_auth_url: &str,
    ) -> Result<Self> {
        let label = label.into();
        let config = Self {
            auth_server_url: parse_url("auth_server_url", auth_server_url)?,
            oauth_server_url: parse_url("oauth_server_url", oauth_server_url)?,
            profile_server_url: parse_url("profile_server_url", profile_server_url)?,
            sign_in_url: parse_url("sign_in_url", sign_in_url)?,
            settings_url: parse_url("settings_url", settings_url)?,
            force_auth_url: parse_url("force_auth_url", force_auth_url)?,
            label,
        };
        debug!(label = %config.label, "built endpoint configuration");
        Ok(config)
    }

    pub fn stable_dev() -> Self {
        Self::preset(
            "StableDev",
            "https://stable.dev.lcip.org/auth/v1",
            "https://oauth-stable.dev.lcip.org",
            "https://stable.dev.lcip.org/profile",
            "https://stable.dev.lcip.org",
        )
    }

    pub fn latest_dev() -> Self {
        Self::preset(
            "LatestDev",
            "https://latest.dev.lcip.org/auth/v1",
            "https://oauth-latest.dev.lcip.org",
            "https://latest.dev.lcip.org/profile",
            "https://latest.dev.lcip.org",
        )
    }

    pub fn stage() -> Self {
        Self::preset(
            "Stage",
            "https://api-accounts.stage.mozaws.net/v1",
            "https://oauth.stage.mozaws.net/v1",
            "https://profile.stage.mozaws.net/v1",
            "https://accounts.stage.mozaws.net",
        )
    }

    pub fn production() -> Self {
        Self::preset(
            "Production",
            "https://api.accounts.firefox.com/v1",
            "https://oauth.accounts.firefox.com/v1",
            "https://profile.accounts.firefox.com/v1",
            "https://accounts.firefox.com",
        )
    }

    /// All presets share the same page layout under `content_server`.
    fn preset(
        label: &'static str,
        auth_server_url: &str,
        oauth_server_url: &str,
        profile_server_url: &str,
        content_server: &str,
    ) -> Self {
        let sign_in_url = append_context_param(&format!("{content_server}/signin?service=sync"));
        let settings_url = append_context_param(&format!("{content_server}/settings"));
        let force_auth_url =
            append_context_param(&format!("{content_server}/force_auth?service=sync"));

        match Self::new(
            label,
            auth_server_url,
            oauth_server_url,
            profile_server_url,
            &sign_in_url,
            &settings_url,
            &force_auth_url,
        ) {
            Ok(config) => config,
            Err(e) => panic!("preset `{label}` has an invalid endpoint: {e}"),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn auth_server_url(&self) -> &EndpointUrl {
        &self.auth_server_url
    }

    pub fn oauth_server_url(&self) -> &EndpointUrl {
        &self.oauth_server_url
    }

    pub fn profile_server_url(&self) -> &EndpointUrl {
        &self.profile_server_url
    }

    pub fn sign_in_url(&self) -> &EndpointUrl {
        &self.sign_in_url
    }

    pub fn settings_url(&self) -> &EndpointUrl {
        &self.settings_url
    }

    pub fn force_auth_url(&self) -> &EndpointUrl {
        &self.force_auth_url
    }
}

/// Append `context=<CONTEXT>` to `url`, as an additional query parameter if
/// `url` already has a query.
pub fn append_context_param(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}context={CONTEXT}")
}

fn parse_url(field: &'static str, url: &str) -> Result<EndpointUrl> {
    url.parse().map_err(|source| Error::InvalidConfiguration {
        field,
        url: url.to_owned(),
        source,
    })
}
