use uuid::Uuid;

/// Bucket for product media attached by startups at order creation.
pub const PRODUCT_MEDIA_BUCKET: &str = "startup-products";
/// Bucket for final videos uploaded by creators.
pub const DELIVERY_BUCKET: &str = "creator-deliveries";

/// Supabase Storage client.
///
/// Objects are written through the Storage REST API with the service-role
/// key and read back through stable public URLs. Uploads always complete
/// before any order row referencing them is written, so a failed upload
/// never leaves a partial order behind (the reverse — an uploaded blob with
/// no row — is an accepted leak).
#[derive(Clone)]
pub struct StorageClient {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl StorageClient {
    pub fn new(supabase_url: &str, service_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: supabase_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }

    /// Store `bytes` at `bucket/path` and return the public URL.
    pub async fn store(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, String> {
        let url = format!("{}/storage/v1/object/{bucket}/{path}", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.service_key)
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|e| format!("Upload to {bucket} failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Upload to {bucket} failed: HTTP {status} {body}"));
        }

        Ok(self.public_url(bucket, path))
    }

    /// The stable public URL for an object.
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{path}", self.base_url)
    }
}

/// Compose an object path as `{actor_id}/{purpose}-{timestamp}-{random}.{ext}`.
///
/// Path uniqueness is this side's responsibility; the timestamp plus a
/// random suffix keeps concurrent uploads from the same actor apart.
pub fn object_path(actor_id: Uuid, purpose: &str, filename: Option<&str>) -> String {
    let ext = filename
        .filter(|name| name.contains('.'))
        .and_then(|name| name.rsplit('.').next())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8)
        .map(|ext| ext.to_lowercase())
        .unwrap_or_else(|| "bin".to_string());

    let timestamp = chrono::Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple().to_string();

    format!("{actor_id}/{purpose}-{timestamp}-{}.{ext}", &random[..8])
}
