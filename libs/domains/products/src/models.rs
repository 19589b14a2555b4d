use mongodb::bson::oid::ObjectId;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::{ProductError, ProductResult};

/// Product document as persisted in the `products` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
}

impl Product {
    pub fn new(id: ObjectId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            quantity: fields.quantity,
            price: fields.price,
        }
    }
}

/// Product as rendered to clients; `id` is the 24-character hex form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductView {
    #[schema(example = "65f1c2a4b7e8d9f0a1b2c3d4")]
    pub id: String,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = "Tools")]
    pub category: String,
    #[schema(example = 5)]
    pub quantity: i64,
    #[schema(example = 9.99)]
    pub price: f64,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            name: product.name,
            category: product.category,
            quantity: product.quantity,
            price: product.price,
        }
    }
}

/// Request body for create and update.
///
/// Missing or `null` fields fall back to their zero value. Unknown fields are
/// ignored. A client `id` must still be a well-formed ObjectId (hex string,
/// `""`, `null` or `{"$oid": ...}`); it is never used for the write.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductPayload {
    #[serde(default, deserialize_with = "client_id")]
    #[schema(value_type = Option<String>, example = "65f1c2a4b7e8d9f0a1b2c3d4")]
    pub id: Option<ObjectId>,
    #[schema(example = "Widget")]
    pub name: Option<String>,
    #[schema(example = "Tools")]
    pub category: Option<String>,
    #[schema(example = 5)]
    pub quantity: Option<i64>,
    #[schema(example = 9.99)]
    pub price: Option<f64>,
}

impl ProductPayload {
    /// Checks required fields, name first, then category.
    pub fn validate(self) -> ProductResult<ProductFields> {
        let fields = ProductFields {
            name: self.name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            quantity: self.quantity.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        };

        if fields.name.is_empty() {
            return Err(ProductError::Validation("Product name is required"));
        }
        if fields.category.is_empty() {
            return Err(ProductError::Validation("Product category is required"));
        }

        Ok(fields)
    }
}

fn client_id<'de, D>(deserializer: D) -> Result<Option<ObjectId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Hex(String),
        Extended {
            #[serde(rename = "$oid")]
            oid: String,
        },
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Hex(hex)) if hex.is_empty() => Ok(None),
        Some(RawId::Hex(hex)) | Some(RawId::Extended { oid: hex }) => ObjectId::parse_str(&hex)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid ObjectId: {hex:?}"))),
    }
}

/// The four mutable product fields after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
}

/// Plain `{"message": ...}` acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Product deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parses a path segment as a product id.
///
/// Anything other than a 24-character hex string is `InvalidId`.
pub fn parse_product_id(raw: &str) -> ProductResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| ProductError::InvalidId)
}
