use async_trait::async_trait;
use serde::Serialize;

/// A rental listing. Read-only: the catalog has no persistence layer, so
/// there is no `FromRow` here and no write path anywhere.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

/// Source of listings, injected through `AppState` so handlers never reach
/// for a global. The seed implementation below is the only one in
/// production; tests substitute their own.
#[async_trait]
pub trait PropertyCatalog: Send + Sync {
    async fn all(&self) -> Vec<Property>;
}

pub struct SeedCatalog {
    properties: Vec<Property>,
}

impl SeedCatalog {
    pub fn new() -> Self {
        Self {
            properties: seed_properties(),
        }
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyCatalog for SeedCatalog {
    async fn all(&self) -> Vec<Property> {
        self.properties.clone()
    }
}

pub(crate) fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".into(),
            title: "Modern Downtown Apartment".into(),
            description: "Beautiful modern apartment in the heart of downtown".into(),
            address: "123 Main St, Downtown".into(),
            price: 2500.0,
            bedrooms: 2,
            bathrooms: 2,
            amenities: vec!["Parking".into(), "Gym".into(), "Pool".into()],
            images: vec!["/placeholder.jpg".into()],
        },
        Property {
            id: "2".into(),
            title: "Cozy Studio in West End".into(),
            description: "Perfect studio apartment for young professionals".into(),
            address: "456 West St, West End".into(),
            price: 1800.0,
            bedrooms: 1,
            bathrooms: 1,
            amenities: vec!["Parking".into(), "Laundry".into()],
            images: vec!["/placeholder.jpg".into()],
        },
    ]
}
