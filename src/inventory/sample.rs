//! Built-in catalog used by [`InventoryRepository::load_sample_data`](super::InventoryRepository::load_sample_data).

use crate::model::{ImageRef, ProductInput};

const STORE_NAME: &str = "Aling Rosa's Store";
const STORE_TYPE: &str = "Sari-sari store";
const STORE_LOCATION: &str = "Quezon City";

/// The demo products, in the order they are added.
pub fn sample_products() -> Vec<ProductInput> {
    [
        ("sample-1", "Pancit Canton", 13.0, 16.0, 24, "pancit-canton.png"),
        ("sample-2", "Kopiko 3-in-1", 8.5, 10.0, 30, "kopiko.png"),
        ("sample-3", "Century Tuna", 32.0, 38.0, 12, "century-tuna.png"),
        ("sample-4", "SkyFlakes Crackers", 7.0, 9.0, 20, "skyflakes.png"),
        ("sample-5", "Bear Brand Swak", 11.0, 13.0, 18, "bear-brand.png"),
        ("sample-6", "Safeguard Soap", 28.0, 35.0, 6, "safeguard.png"),
    ]
    .into_iter()
    .map(|(id, name, cost, price, stock, image)| {
        ProductInput::new(id, name, cost, price, stock)
            .with_store(STORE_NAME, STORE_TYPE, STORE_LOCATION)
            .with_image(ImageRef::new(format!("assets/products/{image}")))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique_and_stocked() {
        let samples = sample_products();
        let ids: HashSet<_> = samples.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), samples.len());
        assert!(samples.iter().all(|p| p.stock > 0 && p.price > p.cost));
    }
}
