//! Remote bill store client
//!
//! The store is an external service; this module owns the only seam the
//! view-models talk through. Pages inject `Rc<dyn BillStore>` so tests can
//! substitute a recording store.

use async_trait::async_trait;
use contracts::domain::a001_bill::aggregate::{Bill, BillDraft, ReceiptUpload};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

#[async_trait(?Send)]
pub trait BillStore {
    /// All bill records, unformatted.
    async fn list(&self) -> Result<Vec<Bill>, String>;

    /// Upload a receipt file; returns the stored file URL and the key the
    /// final record is updated under.
    async fn create(
        &self,
        file: &web_sys::File,
        file_name: &str,
        email: &str,
    ) -> Result<ReceiptUpload, String>;

    /// Persist the assembled bill under its store-assigned key.
    async fn update(&self, draft: &BillDraft) -> Result<Bill, String>;
}

/// HTTP implementation against the bill store API.
pub struct RemoteBillStore;

#[async_trait(?Send)]
impl BillStore for RemoteBillStore {
    async fn list(&self) -> Result<Vec<Bill>, String> {
        let response = Request::get(&api_url("/api/bills"))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Erreur {}", response.status()));
        }

        response
            .json::<Vec<Bill>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn create(
        &self,
        file: &web_sys::File,
        file_name: &str,
        email: &str,
    ) -> Result<ReceiptUpload, String> {
        let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
        form.append_with_blob("file", file)
            .map_err(|e| format!("{e:?}"))?;
        form.append_with_str("fileName", file_name)
            .map_err(|e| format!("{e:?}"))?;
        form.append_with_str("email", email)
            .map_err(|e| format!("{e:?}"))?;

        let response = Request::post(&api_url("/api/bills"))
            .body(form)
            .map_err(|e| format!("Failed to build request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Erreur {}", response.status()));
        }

        response
            .json::<ReceiptUpload>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn update(&self, draft: &BillDraft) -> Result<Bill, String> {
        // The key may legitimately still be unset when the upload never
        // completed; the store rejects such a record, not the client.
        let key = draft.id.as_deref().unwrap_or_default();

        let response = Request::patch(&api_url(&format!("/api/bills/{}", key)))
            .json(draft)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Erreur {}", response.status()));
        }

        response
            .json::<Bill>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}
