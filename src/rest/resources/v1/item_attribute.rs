//! Item attribute resource.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::HttpClient;
use crate::rest::service::{post, Fields};
use crate::rest::ResourceError;

/// An attribute that items of a category can (or must) carry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemAttribute {
    /// The attribute ID.
    pub attribute_id: u64,
    /// The attribute name.
    pub attribute_name: String,
    /// Whether items of the category must set this attribute.
    pub is_mandatory: bool,
    /// Value type (e.g., `STRING_TYPE`, `INT_TYPE`).
    pub attribute_type: String,
    /// Input widget (e.g., `DROP_DOWN`, `TEXT_FILED`).
    pub input_type: String,
    /// Allowed values for drop-down attributes.
    pub options: Vec<String>,
    /// Allowed values with translations.
    pub values: Vec<ItemAttributeValue>,
}

/// An allowed attribute value with its translation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemAttributeValue {
    /// The value in the platform's base language.
    pub original_value: String,
    /// The value in the requested language.
    pub translate_value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ItemAttributesResponse {
    attributes: Vec<ItemAttribute>,
}

/// Attribute operations.
#[allow(async_fn_in_trait)]
pub trait ItemAttributeService {
    /// Lists the attributes of a category.
    ///
    /// `extra` is merged into the request body (e.g., `shopid`, `language`,
    /// `country`) and may override `category_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the call fails.
    async fn list(
        &self,
        category_id: u64,
        extra: &Map<String, Value>,
    ) -> Result<Vec<ItemAttribute>, ResourceError>;
}

/// [`ItemAttributeService`] backed by an [`HttpClient`].
#[derive(Clone, Copy, Debug)]
pub struct ItemAttributes<'a> {
    client: &'a HttpClient,
}

impl<'a> ItemAttributes<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }
}

impl ItemAttributeService for ItemAttributes<'_> {
    async fn list(
        &self,
        category_id: u64,
        extra: &Map<String, Value>,
    ) -> Result<Vec<ItemAttribute>, ResourceError> {
        let fields = Fields::default()
            .with("category_id", category_id)
            .merge(extra);
        let response: ItemAttributesResponse =
            post(self.client, "/item/attributes/get", fields).await?;
        Ok(response.attributes)
    }
}
