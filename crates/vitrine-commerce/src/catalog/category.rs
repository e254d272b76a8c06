//! Product category types.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category from the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Category identifier, when the API assigns one.
    #[serde(default, alias = "_id")]
    pub id: Option<CategoryId>,
    /// Display name.
    pub name: String,
    /// Category image, if any.
    #[serde(default)]
    pub image: Option<String>,
    /// Number of products in the category, when the API reports it.
    #[serde(default)]
    pub product_count: Option<i64>,
}
