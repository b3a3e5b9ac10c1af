use crate::base;
use crate::base::backend;

/// [`backend::Backend`] talking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &base::Config) -> Result<Self, backend::Error> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get<T>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T, backend::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self
            .http
            .get(self.url(endpoint))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(endpoint, %status, "request rejected");
            return Err(backend::Error::Status(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }
}

impl backend::Backend for HttpBackend {
    async fn purchases(
        &self,
        query: &backend::PurchaseQuery,
    ) -> Result<backend::Page<base::Purchase>, backend::Error> {
        self.get("/purchases", &query.pairs()).await
    }

    async fn date_range(&self) -> Result<backend::DateRange, backend::Error> {
        self.get("/purchases/date-range", &[]).await
    }
}
