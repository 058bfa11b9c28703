//! Shared plumbing for resource services.
//!
//! Every partner API operation is a POST of a flat JSON object. Services
//! build that object with [`Fields`] and send it with [`post`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpError};
use crate::rest::ResourceError;

/// Body key carrying the shop ID on most endpoints.
pub const SHOP_ID_FIELD: &str = "shopid";

/// Builder for a request body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields(Map<String, Value>);

impl Fields {
    /// Starts a body holding only `shopid`.
    #[must_use]
    pub fn for_shop(shop_id: u64) -> Self {
        Self::default().with(SHOP_ID_FIELD, shop_id)
    }

    /// Sets `key` to `value`.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Sets `key` to the serialized form of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if `value` cannot be
    /// serialized.
    pub fn with_serialized<T: Serialize + ?Sized>(
        mut self,
        key: &str,
        value: &T,
    ) -> Result<Self, ResourceError> {
        self.0.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Copies every entry of `extra` over the current fields.
    #[must_use]
    pub fn merge(mut self, extra: &Map<String, Value>) -> Self {
        self.0
            .extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Returns the collected fields.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// POSTs `fields` to `path` and decodes the response body as `T`.
///
/// # Errors
///
/// Returns [`ResourceError::Http`] for any transport, API or decoding error.
pub async fn post<T: DeserializeOwned>(
    client: &HttpClient,
    path: &str,
    fields: Fields,
) -> Result<T, ResourceError> {
    let request = HttpRequest::builder(HttpMethod::Post, path)
        .body(fields.into_map())
        .build()
        .map_err(HttpError::from)?;
    Ok(client.request::<T>(&request).await?.body)
}
