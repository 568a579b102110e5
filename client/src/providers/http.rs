//! Production REST API client backed by `reqwest`.
//!
//! One pre-configured `reqwest::Client` carries the configured timeout;
//! the session token is read from the injected token store before every
//! request so a login in one part of the app is visible to the next
//! request without rebuilding the client.

use crate::config::ClientConfig;
use crate::constants::{TOKEN_HEADER, endpoints};
use crate::error::{ClientError, Result};
use crate::providers::api::OffersApi;
use crate::providers::token_store::TokenStore;
use crate::state::{AuthData, Comment, Offer, OfferId, UserInfo};
use serde::de::DeserializeOwned;

/// REST API client for the six-cities service.
#[derive(Debug, Clone)]
pub struct HttpApi<T> {
    client: reqwest::Client,
    base_url: String,
    tokens: T,
}

impl<T: TokenStore> HttpApi<T> {
    /// Build a client from configuration and a token store.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig, tokens: T) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            tokens,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the stored session token, when one is present.
    ///
    /// An unreadable token store downgrades to an anonymous request; the
    /// server will answer 401 where authentication was required.
    fn with_token(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.get() {
            Ok(Some(token)) => request.header(TOKEN_HEADER, token.as_str()),
            Ok(None) => request,
            Err(err) => {
                tracing::warn!(error = %err, "Token store unreadable, sending anonymous request");
                request
            },
        }
    }

    async fn send<D: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<D> {
        let response = self.with_token(request).send().await.map_err(ClientError::from)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Request rejected");
            return Err(ClientError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<D>()
            .await
            .map_err(|e| ClientError::Deserialize(e.to_string()))
    }

    async fn send_no_body(&self, request: reqwest::RequestBuilder) -> Result<()> {
        let response = self.with_token(request).send().await.map_err(ClientError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

impl<T> OffersApi for HttpApi<T>
where
    T: TokenStore,
{
    async fn fetch_offers(&self) -> Result<Vec<Offer>> {
        self.send(self.client.get(self.url(endpoints::OFFERS))).await
    }

    async fn fetch_offer(&self, id: OfferId) -> Result<Offer> {
        let path = format!("{}/{id}", endpoints::OFFERS);
        self.send(self.client.get(self.url(&path))).await
    }

    async fn fetch_nearby(&self, id: OfferId) -> Result<Vec<Offer>> {
        let path = format!("{}/{id}/nearby", endpoints::OFFERS);
        self.send(self.client.get(self.url(&path))).await
    }

    async fn fetch_comments(&self, id: OfferId) -> Result<Vec<Comment>> {
        let path = format!("{}/{id}", endpoints::COMMENTS);
        self.send(self.client.get(self.url(&path))).await
    }

    async fn post_comment(&self, id: OfferId, rating: u8, text: String) -> Result<Vec<Comment>> {
        let path = format!("{}/{id}", endpoints::COMMENTS);
        let body = serde_json::json!({ "comment": text, "rating": rating });
        self.send(self.client.post(self.url(&path)).json(&body)).await
    }

    async fn fetch_favorites(&self) -> Result<Vec<Offer>> {
        self.send(self.client.get(self.url(endpoints::FAVORITE))).await
    }

    async fn set_favorite(&self, id: OfferId, flag: bool) -> Result<Offer> {
        let path = format!("{}/{id}/{}", endpoints::FAVORITE, u8::from(flag));
        self.send(self.client.post(self.url(&path))).await
    }

    async fn check_auth(&self) -> Result<Option<UserInfo>> {
        match self
            .send::<UserInfo>(self.client.get(self.url(endpoints::LOGIN)))
            .await
        {
            Ok(user) => Ok(Some(user)),
            Err(err) if err.is_unauthorized() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn login(&self, auth: AuthData) -> Result<UserInfo> {
        self.send(self.client.post(self.url(endpoints::LOGIN)).json(&auth))
            .await
    }

    async fn logout(&self) -> Result<()> {
        self.send_no_body(self.client.delete(self.url(endpoints::LOGOUT)))
            .await
    }
}
