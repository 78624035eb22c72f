//! REST client for the employee service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use common::{AppError, AppResult, HttpClientConfig};
use domain::{Directorate, Division, EmployeeRecord};

use super::api::EmployeeApi;

/// `reqwest` implementation of [`EmployeeApi`].
#[derive(Debug, Clone)]
pub struct HttpEmployeeApi {
    client: Client,
    base_url: Url,
}

impl HttpEmployeeApi {
    /// Build a client for the service at `config.base_url`.
    pub fn new(config: &HttpClientConfig) -> AppResult<Self> {
        let base_url = Url::parse(config.normalized_base_url()).map_err(|e| {
            AppError::config(format!("Invalid API URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::config(format!(
                "API URL '{}' cannot be used as a base",
                config.base_url
            )));
        }

        let mut builder =
            Client::builder().connect_timeout(Duration::from_millis(config.connect_timeout_ms));
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        debug!("Employee service client targets {}", base_url);
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL extended with percent-encoded path segments.
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::config("API URL cannot be used as a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> AppResult<T> {
        let url = self.endpoint(segments)?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn send_json(
        &self,
        method: Method,
        segments: &[&str],
        record: &EmployeeRecord,
    ) -> AppResult<()> {
        let url = self.endpoint(segments)?;
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .json(record)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn directorates(&self) -> AppResult<Vec<Directorate>> {
        self.get_json(&["api", "directorates"]).await
    }

    async fn divisions(&self) -> AppResult<Vec<Division>> {
        self.get_json(&["api", "divisions"]).await
    }

    async fn divisions_by_directorate(&self, directorate_id: &str) -> AppResult<Vec<Division>> {
        self.get_json(&["api", "divisions", "by-directorate", directorate_id])
            .await
    }

    async fn list_employees(&self) -> AppResult<Vec<EmployeeRecord>> {
        self.get_json(&["api", "employees"]).await
    }

    async fn get_employee(&self, emp_id: &str) -> AppResult<Option<EmployeeRecord>> {
        let url = self.endpoint(&["api", "employees", emp_id])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        // Some deployments answer a miss with an empty 200 or a JSON null.
        let body = response.error_for_status()?.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn search_employees(&self, name: &str) -> AppResult<Vec<EmployeeRecord>> {
        let url = self.endpoint(&["api", "employees", "search"])?;
        debug!("GET {} name={}", url, name);
        let response = self
            .client
            .get(url)
            .query(&[("name", name)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn create_employee(&self, record: &EmployeeRecord) -> AppResult<()> {
        self.send_json(Method::POST, &["api", "employees"], record)
            .await
    }

    async fn update_employee(&self, emp_id: &str, record: &EmployeeRecord) -> AppResult<()> {
        self.send_json(Method::PUT, &["api", "employees", emp_id], record)
            .await
    }

    async fn delete_employee(&self, emp_id: &str) -> AppResult<()> {
        let url = self.endpoint(&["api", "employees", emp_id])?;
        debug!("DELETE {}", url);
        self.client.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}
