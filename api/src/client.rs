use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Category, CategoryChanges, CategoryId, Envelope, Listing, NewCategory};

/// HTTP client for the categories service. Stateless apart from its config;
/// cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct CategoriesClient {
    http: Client,
    config: ApiConfig,
}

impl CategoriesClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// `GET /categories`
    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.config.categories_url("");
        tracing::debug!(%url, "listing categories");
        let categories: Option<Vec<Category>> = self.send(self.http.get(url)).await?;
        Ok(categories.unwrap_or_default())
    }

    /// `GET /categories` without unwrapping the envelope. Any status counts as
    /// long as the body is JSON; only transport and decode failures are errors.
    pub async fn fetch_listing(&self) -> Result<Listing, ApiError> {
        let url = self.config.categories_url("");
        tracing::debug!(%url, "fetching category listing");
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = serde_json::from_str(&response.text().await?)?;
        Ok(Listing { status, body })
    }

    /// `GET /categories/{id}`
    pub async fn get(&self, id: &str) -> Result<Category, ApiError> {
        let id = CategoryId::parse(id)?;
        let url = self.config.categories_url(&format!("/{id}"));
        self.send(self.http.get(url))
            .await?
            .ok_or(ApiError::MissingData)
    }

    /// `POST /categories/`, returning the id assigned by the service.
    pub async fn create(&self, category: &NewCategory) -> Result<CategoryId, ApiError> {
        let url = self.config.categories_url("/");
        tracing::debug!(%url, name = %category.name, "creating category");
        let id: String = self
            .send(self.http.post(url).json(category))
            .await?
            .ok_or(ApiError::MissingData)?;
        CategoryId::parse(&id)
    }

    /// `POST /categories/many/`, returning how many were inserted.
    pub async fn create_many(&self, categories: &[NewCategory]) -> Result<usize, ApiError> {
        let url = self.config.categories_url("/many/");
        tracing::debug!(%url, count = categories.len(), "creating categories");
        self.send(self.http.post(url).json(categories))
            .await?
            .ok_or(ApiError::MissingData)
    }

    /// `PATCH /categories/{id}/`. An empty change set sends nothing.
    pub async fn update(&self, id: &str, changes: &CategoryChanges) -> Result<(), ApiError> {
        let id = CategoryId::parse(id)?;
        if changes.is_empty() {
            tracing::debug!(%id, "skipping update with no changes");
            return Ok(());
        }
        let url = self.config.categories_url(&format!("/{id}/"));
        let _: Option<serde_json::Value> = self.send(self.http.patch(url).json(changes)).await?;
        Ok(())
    }

    /// `DELETE /categories/{id}/`
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let id = CategoryId::parse(id)?;
        let url = self.config.categories_url(&format!("/{id}/"));
        let _: Option<serde_json::Value> = self.send(self.http.delete(url)).await?;
        Ok(())
    }

    /// `DELETE /categories/`, returning how many were removed.
    pub async fn delete_all(&self) -> Result<i64, ApiError> {
        let url = self.config.categories_url("/");
        tracing::debug!(%url, "deleting all categories");
        self.send(self.http.delete(url))
            .await?
            .ok_or(ApiError::MissingData)
    }

    /// `POST /categories/upload/` as multipart, returning the id of the stored
    /// image. The service keeps the file under that id plus the extension.
    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
        let has_extension = Path::new(file_name)
            .extension()
            .is_some_and(|ext| !ext.is_empty());
        if !has_extension {
            return Err(ApiError::InvalidFileName(file_name.to_string()));
        }
        let url = self.config.categories_url("/upload/");
        tracing::debug!(%url, file_name, size = bytes.len(), "uploading category image");
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("image", part);
        self.send(self.http.post(url).multipart(form))
            .await?
            .ok_or(ApiError::MissingData)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Option<T>, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.msg)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            tracing::warn!(status = status.as_u16(), %message, "categories service returned an error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        envelope.into_result()
    }
}
