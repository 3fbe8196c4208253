//! REST helpers that attach the default headers to outbound requests.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the request is never sent and the
//! call reports an error.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed fetch
//! degrades the page rather than crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::headers::RequestDefaults;

/// Merge per-request headers over the defaults. A per-request header whose
/// name matches a default (case-insensitively) replaces it.
#[must_use]
pub fn request_headers(defaults: &RequestDefaults, extra: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = defaults
        .snapshot()
        .into_iter()
        .filter(|(name, _)| !extra.iter().any(|(extra_name, _)| extra_name.eq_ignore_ascii_case(name)))
        .collect();
    headers.extend(extra.iter().map(|(name, value)| ((*name).to_owned(), (*value).to_owned())));
    headers
}

/// Headers for a JSON `GET`: the defaults plus `Accept: application/json`.
#[must_use]
pub fn json_request_headers(defaults: &RequestDefaults) -> Vec<(String, String)> {
    request_headers(defaults, &[("Accept", "application/json")])
}

/// Endpoint describing the signed-in user.
pub const PROFILE_URL: &str = "/api/profile";

/// Body of [`PROFILE_URL`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Fetch the signed-in user's profile with the session's default headers.
///
/// # Errors
///
/// See [`get_json`].
pub async fn fetch_profile(defaults: &RequestDefaults) -> Result<ProfileSummary, String> {
    get_json(PROFILE_URL, defaults).await
}

/// `GET url` with the default headers and decode the JSON body.
///
/// # Errors
///
/// Returns an error string if the request fails, the status is not 2xx, or
/// the body does not decode as `T`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn get_json<T: DeserializeOwned>(url: &str, defaults: &RequestDefaults) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(url);
        for (name, value) in json_request_headers(defaults) {
            request = request.header(&name, &value);
        }
        let resp = request.send().await.map_err(|e| e.to_string())?;
        if !(200..300).contains(&resp.status()) {
            return Err(format!("request failed: {}", resp.status()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
