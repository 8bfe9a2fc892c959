/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::{
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    path::{Path, PathBuf},
    sync::Arc,
};

use reqwest::{
    cookie::Jar,
    header::{HeaderName, HeaderValue},
};
use reqwest::{Certificate, Client};
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to open file {0}: {1}")]
    ReadFile(PathBuf, #[source] std::io::Error),
    #[error("unable to parse the provided certificate {0}: {1}")]
    ParseCertificate(PathBuf, #[source] reqwest::Error),
    #[error("unable to build a http client: {0}")]
    BuildApiClient(#[source] reqwest::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub hostname: String,
    pub port: Option<u16>,
    #[serde(default)]
    pub ipaddress: Option<Ipv4Addr>,
    #[serde(default)]
    pub https_strategy: HttpsStrategy,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HttpsStrategy {
    #[default]
    Strict,
    Specific(PathBuf),
    IgnoreHostname(Option<PathBuf>),
    IgnoreCertificate,
    Http,
}

impl Config {
    pub async fn create_client(
        &self,
        headers: Vec<(HeaderName, HeaderValue)>,
    ) -> Result<(Client, Arc<Jar>)> {
        let cookiejar = Arc::new(Jar::default());
        let mut builder = reqwest::Client::builder()
            .cookie_provider(cookiejar.clone())
            .user_agent("ColDToNs")
            .danger_accept_invalid_hostnames(matches!(
                self.https_strategy,
                HttpsStrategy::IgnoreHostname(_)
            ))
            .danger_accept_invalid_certs(matches!(
                self.https_strategy,
                HttpsStrategy::IgnoreCertificate
            ))
            .default_headers(headers.into_iter().collect());

        if let Some(ip) = self.ipaddress {
            builder = builder.resolve(
                &self.hostname,
                SocketAddr::V4(SocketAddrV4::new(ip, 0)),
            );
        }

        if let HttpsStrategy::Specific(path) = &self.https_strategy {
            let certificate = Self::load_certificate(path).await?;
            builder = builder
                .add_root_certificate(certificate)
                .tls_built_in_root_certs(false);
        }
        if let HttpsStrategy::IgnoreHostname(Some(path)) = &self.https_strategy
        {
            let certificate = Self::load_certificate(path).await?;
            builder = builder
                .add_root_certificate(certificate)
                .tls_built_in_root_certs(false);
        }

        builder
            .build()
            .map(|c| (c, cookiejar))
            .map_err(Error::BuildApiClient)
    }

    async fn load_certificate(path: &Path) -> Result<Certificate> {
        let content = tokio::fs::read(&path)
            .await
            .map_err(|e| Error::ReadFile(path.to_path_buf(), e))?;
        Certificate::from_der(&content)
            .or_else(|_| Certificate::from_pem(&content))
            .map_err(|e| Error::ParseCertificate(path.to_path_buf(), e))
    }

    pub fn base_url(&self, default_port: Option<u16>) -> String {
        format!(
            "{}://{}:{}",
            self.scheme(),
            self.hostname,
            default_port.unwrap_or(self.http_port())
        )
    }

    pub fn scheme(&self) -> &'static str {
        matches!(self.https_strategy, HttpsStrategy::Http)
            .then_some("http")
            .unwrap_or("https")
    }

    pub fn http_port(&self) -> u16 {
        self.port.unwrap_or_else(|| {
            matches!(self.https_strategy, HttpsStrategy::Http)
                .then_some(80)
                .unwrap_or(443)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, HttpsStrategy};

    #[test]
    fn base_url_uses_configured_port() {
        let config = Config {
            hostname: "localhost".to_string(),
            port: Some(5000),
            ipaddress: None,
            https_strategy: HttpsStrategy::Http,
        };
        assert_eq!(config.base_url(None), "http://localhost:5000");
    }

    #[test]
    fn base_url_falls_back_to_scheme_default() {
        let config = Config {
            hostname: "coldtons.example.org".to_string(),
            port: None,
            ipaddress: None,
            https_strategy: HttpsStrategy::Strict,
        };
        assert_eq!(config.http_port(), 443);
        assert_eq!(config.base_url(None), "https://coldtons.example.org:443");
    }
}
