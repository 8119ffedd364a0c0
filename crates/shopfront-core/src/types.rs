//! # Domain Types
//!
//! Catalog-owned types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    Product      │        │    CartEntry    │  (cart module)         │
//! │  │  ─────────────  │ copied │  ─────────────  │                        │
//! │  │  id             │───────►│  product        │                        │
//! │  │  name           │  into  │  quantity       │                        │
//! │  │  description    │        └─────────────────┘                        │
//! │  │  price (Money)  │                                                   │
//! │  │  image_url      │                                                   │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  Products are immutable catalog records. The cart stores value         │
//! │  copies, never live links back into the catalog.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// ## Immutability
/// Products are created once at catalog load and never mutated. When a
/// product is added to the cart, the cart entry takes a value copy, so the
/// cart keeps displaying consistent data even if a future catalog reload
/// changes the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier, stable across sessions.
    pub id: String,

    /// Display name shown in the list and cart views.
    pub name: String,

    /// Short description for the product detail card.
    pub description: String,

    /// Unit price in cents. Never negative for catalog records.
    pub price: Money,

    /// Image reference resolved by the presentation layer.
    pub image_url: String,
}

impl Product {
    /// Creates a new product record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        image_url: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image_url: image_url.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
