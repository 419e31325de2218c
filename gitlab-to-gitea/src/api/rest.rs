//! Minimal JSON-over-HTTP client with bearer authentication.

use super::ApiError;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("gitlab-to-gitea/", env!("CARGO_PKG_VERSION"));

/// A JSON REST client rooted at a service's API prefix.
#[derive(Debug, Clone)]
pub(crate) struct RestClient {
    http: Client,
    base: Url,
    token: String,
}

impl RestClient {
    /// Creates a client for `server`, with every endpoint nested under `api_prefix`.
    ///
    /// `api_prefix` must end with a slash, e.g. `api/v4/`.
    pub(crate) fn new(server: &str, api_prefix: &str, token: &str) -> Result<Self, ApiError> {
        let base = api_base(server, api_prefix)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            base,
            token: token.to_string(),
        })
    }

    /// Builds an endpoint URL from raw path segments.
    ///
    /// Each segment is percent-encoded on its own, so a segment may contain `/`.
    pub(crate) fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a GET request and decodes the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let request = self.http.get(url.clone());
        self.execute(url, request).await
    }

    /// Sends a request with a JSON body and decodes the JSON response.
    pub(crate) async fn send<T, B>(&self, method: Method, url: Url, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.request(method, url.clone()).json(body);
        self.execute(url, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        url: Url,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!(url = %url, "Sending request");
        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Resolves the API root for a server URL.
///
/// The server URL may or may not end with a slash; a sub-path install such
/// as `https://example.com/gitlab` is preserved.
fn api_base(server: &str, api_prefix: &str) -> Result<Url, ApiError> {
    let invalid = |message: String| ApiError::InvalidUrl {
        url: server.to_string(),
        message,
    };

    let mut url = Url::parse(server.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid("expected an http or https URL".to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    url.join(api_prefix).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_appends_prefix() {
        let url = api_base("https://gitlab.com/", "api/v4/").unwrap();
        assert_eq!(url.as_str(), "https://gitlab.com/api/v4/");

        let url = api_base("https://gitlab.com", "api/v4/").unwrap();
        assert_eq!(url.as_str(), "https://gitlab.com/api/v4/");
    }

    #[test]
    fn api_base_keeps_sub_path() {
        let url = api_base("https://example.com/gitea", "api/v1/").unwrap();
        assert_eq!(url.as_str(), "https://example.com/gitea/api/v1/");
    }

    #[test]
    fn api_base_rejects_non_http() {
        assert!(matches!(
            api_base("ftp://example.com", "api/v1/"),
            Err(ApiError::InvalidUrl { .. })
        ));
        assert!(matches!(
            api_base("not a url", "api/v1/"),
            Err(ApiError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn endpoint_encodes_each_segment() {
        let client = RestClient::new("https://gitlab.com/", "api/v4/", "token").unwrap();
        let url = client.endpoint(["projects", "group/sub/project"]);

        assert_eq!(
            url.as_str(),
            "https://gitlab.com/api/v4/projects/group%2Fsub%2Fproject"
        );
    }
}
