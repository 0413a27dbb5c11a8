//! Session helpers on [`HrmClient`].

use hrm_config::Config;

use crate::auth::{self, SessionCookie, SessionSource};
use crate::client::HrmClient;
use crate::endpoints;
use crate::error::Result;

impl HrmClient {
    /// Log in with credentials. See [`endpoints::login`].
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionCookie> {
        endpoints::login(self, username, password).await
    }

    /// Use the configured cookie, or log in. See [`auth::resolve_session`].
    pub async fn resolve_session(&self, config: &Config) -> Result<(SessionCookie, SessionSource)> {
        auth::resolve_session(self, config).await
    }
}
