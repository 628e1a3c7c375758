//! HTTP implementation of the backend traits.
//!
//! The companion service exposes one JSON resource tree per linked account:
//!
//! | Call | Route |
//! |------|-------|
//! | identity lookup | `POST /identities/lookup` |
//! | request code | `POST /accounts/{id}/code` |
//! | sign in | `POST /accounts/{id}/sign-in` |
//! | send message | `POST /accounts/{id}/messages` |
//! | contacts | `GET /accounts/{id}/contacts` |
//! | unread chats | `GET /accounts/{id}/conversations/unread` |
//!
//! Any non-2xx answer becomes [`TransportError::Status`] carrying the code.

use crate::client::{AddressBook, IdentityStore, MessagingAccountClient};
use crate::config::BackendConfig;
use crate::error::TransportError;
use async_trait::async_trait;
use my_telegrams_core::{Account, AccountId, Contact, Conversation};
use rootcause::prelude::Report;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Shared HTTP client for the companion backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpBackend {
    /// Builds the client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, Report<TransportError>> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::InvalidConfig {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Returns a client scoped to one linked account.
    #[must_use]
    pub fn for_account(&self, account: AccountId) -> AccountClient {
        AccountClient {
            backend: self.clone(),
            account,
        }
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<reqwest::Response, Report<TransportError>> {
        let request = match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, endpoint = path, "Backend request failed");
            if e.is_timeout() {
                TransportError::Timeout {
                    endpoint: path.to_string(),
                }
            } else {
                TransportError::Unreachable {
                    endpoint: path.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = path, status = %status, "Backend returned error status");
            return Err(TransportError::Status {
                endpoint: path.to_string(),
                code: status.as_u16(),
            }
            .into());
        }

        debug!(endpoint = path, status = %status, "Backend call succeeded");
        Ok(response)
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, Report<TransportError>> {
        let url = format!("{}{}", self.base_url, path);
        self.send(self.client.get(url), path).await
    }

    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, Report<TransportError>> {
        let url = format!("{}{}", self.base_url, path);
        self.send(self.client.post(url).json(body), path).await
    }
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    path: &str,
) -> Result<T, Report<TransportError>> {
    let value = response
        .json::<T>()
        .await
        .map_err(|e| TransportError::InvalidResponse {
            endpoint: path.to_string(),
            reason: e.to_string(),
        })?;
    Ok(value)
}

#[derive(Serialize)]
struct IdentityLookup<'a> {
    user_ref: &'a str,
}

#[derive(Serialize)]
struct SignInRequest<'a> {
    code: &'a str,
}

#[derive(Deserialize)]
struct SignInResponse {
    authorized: bool,
}

#[derive(Serialize)]
struct OutgoingMessage<'a> {
    recipient: &'a Contact,
    text: &'a str,
}

#[async_trait]
impl IdentityStore for HttpBackend {
    #[instrument(skip_all)]
    async fn load_account(&self, user_ref: &str) -> Result<Account, Report<TransportError>> {
        let path = "/identities/lookup";
        let response = self.post(path, &IdentityLookup { user_ref }).await?;
        decode(response, path).await
    }
}

/// Backend client bound to a single linked account.
#[derive(Debug, Clone)]
pub struct AccountClient {
    backend: HttpBackend,
    account: AccountId,
}

impl AccountClient {
    /// Returns the account this client acts for.
    #[must_use]
    pub fn account(&self) -> AccountId {
        self.account
    }

    fn path(&self, suffix: &str) -> String {
        format!("/accounts/{}{}", self.account, suffix)
    }
}

#[async_trait]
impl MessagingAccountClient for AccountClient {
    #[instrument(skip(self), fields(account = %self.account))]
    async fn request_code(&self) -> Result<(), Report<TransportError>> {
        self.backend
            .post(&self.path("/code"), &serde_json::json!({}))
            .await?;
        Ok(())
    }

    #[instrument(skip_all, fields(account = %self.account))]
    async fn sign_in(&self, code: &str) -> Result<bool, Report<TransportError>> {
        let path = self.path("/sign-in");
        let response = self.backend.post(&path, &SignInRequest { code }).await?;
        let body: SignInResponse = decode(response, &path).await?;
        debug!(authorized = body.authorized, "Sign-in result");
        Ok(body.authorized)
    }

    #[instrument(skip_all, fields(account = %self.account))]
    async fn send_message(
        &self,
        recipient: &Contact,
        text: &str,
    ) -> Result<(), Report<TransportError>> {
        self.backend
            .post(&self.path("/messages"), &OutgoingMessage { recipient, text })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AddressBook for AccountClient {
    #[instrument(skip(self), fields(account = %self.account))]
    async fn contacts(&self) -> Result<Vec<Contact>, Report<TransportError>> {
        let path = self.path("/contacts");
        let response = self.backend.get(&path).await?;
        decode(response, &path).await
    }

    #[instrument(skip(self), fields(account = %self.account))]
    async fn unread_conversations(&self) -> Result<Vec<Conversation>, Report<TransportError>> {
        let path = self.path("/conversations/unread");
        let response = self.backend.get(&path).await?;
        decode(response, &path).await
    }
}
