/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

use crate::application::auth::BearerToken;
use crate::application::config::RestApiConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// Authenticated HTTP transport for the TD Ameritrade REST API
///
/// Every request carries the `Authorization: Bearer <token>` header. Requests are
/// sent once: there is no retry, rate limiting or token refresh.
pub struct HttpClient {
    http_client: Client,
    token: BearerToken,
    base_url: String,
}

impl HttpClient {
    /// Creates a new transport
    ///
    /// # Arguments
    /// * `token` - Bearer token used for every request
    /// * `rest_api` - Base URL and timeout
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Transport ready to use
    /// * `Err(AppError)` - If the underlying reqwest client cannot be built
    pub fn new(token: BearerToken, rest_api: &RestApiConfig) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            token,
            base_url: rest_api.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a GET request and decodes the JSON body
    ///
    /// # Arguments
    /// * `path` - Endpoint path relative to the base URL, or an absolute URL
    /// * `query` - Query parameters
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError::Upstream)` - If the API answered with a non-success status
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let response = self.request(Method::GET, path, query).await?;
        self.parse_response(response).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Response, AppError> {
        let url = self.url(path);
        debug!("{} {} {:?}", method, url, query);

        let response = self
            .http_client
            .request(method, &url)
            .header(AUTHORIZATION, self.token.header_value())
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Upstream { status, body });
        }

        Ok(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
