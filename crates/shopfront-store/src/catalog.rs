//! # Demo Catalog
//!
//! The static product list backing the demo shop. There is no catalog
//! service; the list view loads these records once and renders them.
//!
//! Lookups are synchronous and infallible. Catalog fetch errors are an
//! external concern this core does not model.

use shopfront_core::{Money, Product};

/// Seed records: id, name, description, price in cents, image path.
///
/// Ids are stable across sessions; persisted cart entries reference them.
const PRODUCTS: &[(&str, &str, &str, i64, &str)] = &[
    (
        "P-001",
        "Arcade Tee",
        "Soft cotton tee with a retro arcade print.",
        2499,
        "/images/arcade-tee.png",
    ),
    (
        "P-002",
        "Canvas Tote",
        "A sturdy everyday tote with interior pocket.",
        1999,
        "/images/canvas-tote.png",
    ),
    (
        "P-003",
        "Enamel Mug",
        "12 oz camping mug, speckled enamel finish.",
        1450,
        "/images/enamel-mug.png",
    ),
    (
        "P-004",
        "Desk Plant",
        "Low-maintenance succulent in a ceramic pot.",
        1250,
        "/images/desk-plant.png",
    ),
    (
        "P-005",
        "Field Notebook",
        "48-page dot-grid notebook, pack of three.",
        999,
        "/images/field-notebook.png",
    ),
    (
        "P-006",
        "Wool Beanie",
        "Ribbed merino beanie, one size.",
        2199,
        "/images/wool-beanie.png",
    ),
    (
        "P-007",
        "Sticker Pack",
        "Ten die-cut vinyl stickers, weatherproof.",
        599,
        "/images/sticker-pack.png",
    ),
    (
        "P-008",
        "Water Bottle",
        "Insulated 750 ml bottle, keeps drinks cold all day.",
        2899,
        "/images/water-bottle.png",
    ),
];

/// Returns the current product list, in display order.
pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|(id, name, description, price_cents, image_url)| {
            Product::new(
                *id,
                *name,
                *description,
                Money::from_cents(*price_cents),
                *image_url,
            )
        })
        .collect()
}

/// Looks up a single product by id.
pub fn find(product_id: &str) -> Option<Product> {
    products().into_iter().find(|p| p.id == product_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<String> = products().into_iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PRODUCTS.len());
    }

    #[test]
    fn test_catalog_prices_are_non_negative() {
        assert!(products().iter().all(|p| !p.price.is_negative()));
    }

    #[test]
    fn test_find_known_and_unknown() {
        let tee = find("P-001").unwrap();
        assert_eq!(tee.name, "Arcade Tee");

        assert!(find("P-999").is_none());
    }
}
