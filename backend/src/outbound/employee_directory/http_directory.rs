//! Reqwest-backed employee directory adapter.
//!
//! This adapter owns transport details only: URL construction, the read
//! timeout, error classification, and envelope decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use tracing::info;

use super::dto::{
    CreateEmployeeDto, DeleteEmployeeDto, EnvelopeDto, employee_from_wire, employees_from_wire,
};
use super::error_classifier::classify;
use crate::domain::ports::{EmployeeDirectory, EmployeeDirectoryError};
use crate::domain::{Employee, EmployeeId, NewEmployee};

const COLLECTION_PATH: [&str; 3] = ["api", "v1", "employee"];

/// Employee directory adapter issuing one HTTP request per port call.
pub struct HttpEmployeeDirectory {
    client: Client,
    base_url: Url,
}

impl HttpEmployeeDirectory {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// `base_url` may carry a path prefix; the collection path is appended
    /// to it.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, read_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(read_timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn collection_url(&self) -> Result<Url, EmployeeDirectoryError> {
        self.url_with_segments(&[])
    }

    fn record_url(&self, id: &EmployeeId) -> Result<Url, EmployeeDirectoryError> {
        self.url_with_segments(&[id.as_ref()])
    }

    fn url_with_segments(&self, extra: &[&str]) -> Result<Url, EmployeeDirectoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                EmployeeDirectoryError::transport(format!(
                    "base url {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(COLLECTION_PATH)
            .extend(extra);
        Ok(url)
    }

    /// Send `request` and return the envelope `data` member of a success
    /// response, classifying every other status.
    async fn fetch_data(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<Value>, EmployeeDirectoryError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(classify(status, body.as_ref()).into());
        }

        let envelope: EnvelopeDto<Value> = serde_json::from_slice(body.as_ref())
            .map_err(|error| {
                EmployeeDirectoryError::decode(format!("invalid envelope JSON payload: {error}"))
            })?;
        Ok(envelope.data)
    }

    async fn fetch_required(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<Value, EmployeeDirectoryError> {
        self.fetch_data(request)
            .await?
            .ok_or_else(|| EmployeeDirectoryError::missing_payload(operation))
    }
}

#[async_trait]
impl EmployeeDirectory for HttpEmployeeDirectory {
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeDirectoryError> {
        info!("requesting employee collection from directory");
        let request = self.client.get(self.collection_url()?);
        let data = self.fetch_required(request, "list_all").await?;
        employees_from_wire(data).map_err(EmployeeDirectoryError::decode)
    }

    async fn get_by_id(&self, id: &EmployeeId) -> Result<Employee, EmployeeDirectoryError> {
        info!(employee_id = %id, "requesting employee from directory");
        let request = self.client.get(self.record_url(id)?);
        let data = self.fetch_required(request, "get_by_id").await?;
        employee_from_wire(data).map_err(EmployeeDirectoryError::decode)
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee, EmployeeDirectoryError> {
        info!("submitting employee to directory");
        let request = self
            .client
            .post(self.collection_url()?)
            .json(&CreateEmployeeDto::from(employee));
        let data = self.fetch_required(request, "create").await?;
        employee_from_wire(data).map_err(EmployeeDirectoryError::decode)
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, EmployeeDirectoryError> {
        info!("requesting deletion by name from directory");
        let request = self
            .client
            .delete(self.collection_url()?)
            .json(&DeleteEmployeeDto { name });
        match self.fetch_data(request).await? {
            None => Ok(false),
            Some(Value::Bool(deleted)) => Ok(deleted),
            Some(other) => Err(EmployeeDirectoryError::decode(format!(
                "expected boolean deletion result, found {other}"
            ))),
        }
    }
}

fn map_transport_error(error: reqwest::Error) -> EmployeeDirectoryError {
    if error.is_timeout() {
        EmployeeDirectoryError::timeout(error.to_string())
    } else {
        EmployeeDirectoryError::transport(error.to_string())
    }
}
