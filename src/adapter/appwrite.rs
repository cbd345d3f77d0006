//! Appwrite document store adapter.
//!
//! Talks to an Appwrite-compatible databases REST API: one application maps
//! to one document in a single collection. Record ids are generated client
//! side so a create carries its identity with it.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::domain::{
    AnswerSet, Application, ApplicantId, ApplicationStatus, PendingApplication, RecordId,
    StoredApplication,
};
use crate::error::{Result, StoreError};
use crate::port::ApplicationStore;

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(rename = "$id")]
    id: String,
    applicant_id: String,
    requested_name: String,
    about: String,
    timezone_age: String,
    playtime: String,
    playstyle: String,
    status: ApplicationStatus,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    total: u64,
    documents: Vec<Document>,
}

impl From<Document> for StoredApplication {
    fn from(doc: Document) -> Self {
        StoredApplication {
            id: RecordId::new(doc.id),
            application: Application {
                applicant_id: ApplicantId::new(doc.applicant_id),
                requested_name: doc.requested_name,
                answers: AnswerSet {
                    about: doc.about,
                    timezone_age: doc.timezone_age,
                    playtime: doc.playtime,
                    playstyle: doc.playstyle,
                },
                status: doc.status,
                created_at: doc.created_at,
            },
        }
    }
}

pub struct AppwriteStore {
    client: Client,
    documents_url: String,
    project_id: String,
    api_key: String,
}

impl AppwriteStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let api_key = config.api_key.clone().unwrap_or_default();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            documents_url: format!(
                "{}/databases/{}/collections/{}/documents",
                config.endpoint.trim_end_matches('/'),
                config.database_id,
                config.collection_id,
            ),
            project_id: config.project_id.clone(),
            api_key,
        })
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
    }

    async fn check(response: Response) -> std::result::Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    /// Fetch documents matching an `equal` filter on each given attribute.
    async fn query_equal(
        &self,
        filters: &[(&str, &str)],
    ) -> std::result::Result<DocumentList, StoreError> {
        let params: Vec<(&str, String)> = filters
            .iter()
            .map(|(attribute, value)| {
                let query = json!({
                    "method": "equal",
                    "attribute": attribute,
                    "values": [value],
                })
                .to_string();
                ("queries[]", query)
            })
            .collect();

        debug!(filters = ?filters, "Querying store");
        let response = self
            .authed(self.client.get(&self.documents_url))
            .query(&params)
            .send()
            .await
            .map_err(StoreError::Transport)?;

        Self::check(response)
            .await?
            .json::<DocumentList>()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl ApplicationStore for AppwriteStore {
    async fn create(&self, application: &Application) -> std::result::Result<RecordId, StoreError> {
        let document_id = uuid::Uuid::new_v4().simple().to_string();
        let body = json!({
            "documentId": document_id,
            "data": {
                "applicant_id": application.applicant_id.value(),
                "requested_name": application.requested_name,
                "about": application.answers.about,
                "timezone_age": application.answers.timezone_age,
                "playtime": application.answers.playtime,
                "playstyle": application.answers.playstyle,
                "status": application.status.as_str(),
                "created_at": application.created_at.to_rfc3339(),
            },
        });

        let response = self
            .authed(self.client.post(&self.documents_url))
            .json(&body)
            .send()
            .await
            .map_err(StoreError::Transport)?;
        Self::check(response).await?;

        info!(name = %application.requested_name, record = %document_id, "Application record created");
        Ok(RecordId::new(document_id))
    }

    async fn list_pending(&self) -> std::result::Result<Vec<PendingApplication>, StoreError> {
        let list = self
            .query_equal(&[("status", ApplicationStatus::Pending.as_str())])
            .await?;
        debug!(count = list.documents.len(), "Fetched pending applications");

        Ok(list
            .documents
            .into_iter()
            .map(|doc| PendingApplication {
                applicant_id: ApplicantId::new(doc.applicant_id),
                requested_name: doc.requested_name,
            })
            .collect())
    }

    async fn find_by_name(
        &self,
        requested_name: &str,
    ) -> std::result::Result<Option<StoredApplication>, StoreError> {
        let list = self.query_equal(&[("requested_name", requested_name)]).await?;

        if list.total > 1 {
            warn!(
                name = %requested_name,
                matches = list.total,
                "Duplicate records for requested name, taking the first"
            );
        }

        Ok(list.documents.into_iter().next().map(StoredApplication::from))
    }

    async fn find_pending_by_name(
        &self,
        requested_name: &str,
    ) -> std::result::Result<Option<StoredApplication>, StoreError> {
        let list = self
            .query_equal(&[
                ("requested_name", requested_name),
                ("status", ApplicationStatus::Pending.as_str()),
            ])
            .await?;

        if list.total > 1 {
            warn!(
                name = %requested_name,
                matches = list.total,
                "Duplicate pending records for requested name, taking the first"
            );
        }

        Ok(list.documents.into_iter().next().map(StoredApplication::from))
    }

    async fn update_status(
        &self,
        id: &RecordId,
        status: ApplicationStatus,
    ) -> std::result::Result<(), StoreError> {
        let url = format!("{}/{}", self.documents_url, id.value());
        let body = json!({ "data": { "status": status.as_str() } });

        let response = self
            .authed(self.client.patch(&url))
            .json(&body)
            .send()
            .await
            .map_err(StoreError::Transport)?;
        Self::check(response).await?;

        info!(record = %id, status = %status, "Application record updated");
        Ok(())
    }
}
