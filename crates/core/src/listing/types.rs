use serde::{Deserialize, Serialize};

/// Status value carried in every listing body.
pub const LISTING_STATUS: u16 = 200;

/// Where the names in a listing were read from.
///
/// The serialized labels are part of the public response format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    #[serde(rename = "reddis")]
    Cache,
    #[serde(rename = "SQLLITE")]
    Store,
}

/// Response body of the fruit listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitListing {
    pub status: u16,
    pub db: DataSource,
    pub data: Vec<String>,
}

impl FruitListing {
    /// A listing served from the cached snapshot.
    pub fn from_cache(data: Vec<String>) -> Self {
        Self {
            status: LISTING_STATUS,
            db: DataSource::Cache,
            data,
        }
    }

    /// A listing read from the fruit store.
    pub fn from_store(data: Vec<String>) -> Self {
        Self {
            status: LISTING_STATUS,
            db: DataSource::Store,
            data,
        }
    }
}
