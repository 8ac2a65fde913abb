//! Where the access token comes from. The token exchange itself lives in an
//! external auth server; this module only talks to its `/login` endpoint.

use crate::spotify::models::AccessToken;
use anyhow::Context;
use serde::Deserialize;
use serde_json::json;

pub const TOKEN_ENV: &str = "DASHTUNE_ACCESS_TOKEN";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
}

/// Environment first, then the config file.
pub fn resolve_token(configured: Option<&str>) -> Option<AccessToken> {
    pick_token(std::env::var(TOKEN_ENV).ok(), configured)
}

fn pick_token(env: Option<String>, configured: Option<&str>) -> Option<AccessToken> {
    env.and_then(AccessToken::new)
        .or_else(|| configured.and_then(AccessToken::new))
}

/// Trade an authorization `code` for tokens via the auth server.
pub async fn exchange_code(server: &str, code: &str) -> anyhow::Result<LoginResponse> {
    let url = format!("{}/login", server.trim_end_matches('/'));
    let resp: LoginResponse = super::api::http_client()?
        .post(&url)
        .json(&json!({ "code": code }))
        .send()
        .await
        .with_context(|| format!("send login request to {url}"))?
        .error_for_status()
        .context("login http status")?
        .json()
        .await
        .context("parse login json")?;

    if AccessToken::new(resp.access_token.as_str()).is_none() {
        anyhow::bail!("auth server returned an empty access token");
    }
    Ok(resp)
}
