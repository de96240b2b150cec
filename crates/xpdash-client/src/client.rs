use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use xpdash_types::{ProgressRecord, Transaction, UserProfile};

use crate::error::{Error, GraphqlError, Result};
use crate::queries;
use crate::session::Session;

pub const DEFAULT_BASE_URL: &str = "https://learn.reboot01.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Applied to every request; a timeout surfaces as a transport error.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// API client for the platform: Basic→JWT login exchange plus
/// bearer-authenticated GraphQL queries. Owns the session token; the
/// aggregators never see this layer.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: Session::new(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Exchange Basic credentials for a JWT and store it in the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        debug!(username, "signing in");
        let response = self
            .http
            .post(format!("{}/api/auth/signin", self.base_url))
            .basic_auth(username, Some(password))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Auth(format!(
                "signin endpoint returned {}",
                response.status()
            )));
        }

        // The platform returns the token as a JSON-encoded string.
        let token: String = response
            .json()
            .await
            .map_err(|e| Error::Auth(format!("malformed signin response: {e}")))?;
        self.session.set(token);
        Ok(())
    }

    /// Best-effort logout: tell the platform, then clear the local session
    /// regardless of the outcome.
    pub async fn logout(&self) {
        if let Some(token) = self.session.token() {
            let result = self
                .http
                .post(format!("{}/api/auth/logout", self.base_url))
                .bearer_auth(&token)
                .send()
                .await;
            if let Err(e) = result {
                warn!("logout request failed: {e}");
            }
        }
        self.session.clear();
    }

    /// Run a GraphQL query and return its `data` payload.
    ///
    /// A 401 clears the session and surfaces as `SessionExpired`; a
    /// non-empty `errors` array is a failure regardless of HTTP status.
    pub async fn graphql(&self, query: &str, variables: Value) -> Result<Value> {
        let token = self
            .session
            .token()
            .ok_or_else(|| Error::Auth("no active session".to_string()))?;

        debug!(query, "running GraphQL query");
        let response = self
            .http
            .post(format!("{}/api/graphql-engine/v1/graphql", self.base_url))
            .bearer_auth(&token)
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.session.clear();
            return Err(Error::SessionExpired);
        }
        if !response.status().is_success() {
            return Err(Error::Transport(format!(
                "GraphQL endpoint returned {}",
                response.status()
            )));
        }

        let body: GraphqlResponse = response.json().await?;
        classify(body)
    }

    /// First row of the `user` query; an empty array degrades to `None`
    /// with a warning instead of an error.
    pub async fn user_profile(&self) -> Result<Option<UserProfile>> {
        let data = self.graphql(queries::USER, Value::Null).await?;
        let users: Vec<UserProfile> = rows(data, "user");
        if users.is_empty() {
            warn!("no user data found or user array is empty");
        }
        Ok(users.into_iter().next())
    }

    pub async fn audit_transactions(&self) -> Result<Vec<Transaction>> {
        let data = self.graphql(queries::AUDIT_TRANSACTIONS, Value::Null).await?;
        Ok(rows(data, "transaction"))
    }

    pub async fn xp_transactions(&self) -> Result<Vec<Transaction>> {
        let data = self.graphql(queries::XP_TRANSACTIONS, Value::Null).await?;
        Ok(rows(data, "transaction"))
    }

    pub async fn skill_transactions(&self) -> Result<Vec<Transaction>> {
        let data = self.graphql(queries::SKILL_TRANSACTIONS, Value::Null).await?;
        Ok(rows(data, "transaction"))
    }

    pub async fn progress_records(&self) -> Result<Vec<ProgressRecord>> {
        let data = self.graphql(queries::PROGRESS, Value::Null).await?;
        Ok(rows(data, "progress"))
    }
}

/// Split the GraphQL envelope into data or a typed error.
fn classify(response: GraphqlResponse) -> Result<Value> {
    if !response.errors.is_empty() {
        return Err(Error::Query(response.errors));
    }
    response
        .data
        .ok_or_else(|| Error::DataShape("response carried neither data nor errors".to_string()))
}

/// Pull typed rows out of `data.<field>`. A missing or misshapen field
/// degrades to an empty list with a warning so the dashboard renders
/// zeroed cards instead of failing.
fn rows<T: DeserializeOwned>(mut data: Value, field: &str) -> Vec<T> {
    let Some(value) = data.get_mut(field).map(Value::take) else {
        warn!("response data had no {field} field");
        return Vec::new();
    };
    match serde_json::from_value(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("malformed {field} rows: {e}");
            Vec::new()
        }
    }
}
