//! Static vocabulary shown on the search page and the bundled mock results.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Cuisine tags offered by the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cuisine {
    #[serde(rename = "North Indian")]
    NorthIndian,
    #[serde(rename = "South Indian")]
    SouthIndian,
    Chinese,
    Italian,
    Mexican,
    #[serde(rename = "Fast Food")]
    FastFood,
    Desserts,
    Beverages,
}

impl Cuisine {
    /// All cuisines, in display order
    pub const ALL: [Cuisine; 8] = [
        Cuisine::NorthIndian,
        Cuisine::SouthIndian,
        Cuisine::Chinese,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::FastFood,
        Cuisine::Desserts,
        Cuisine::Beverages,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Cuisine::NorthIndian => "North Indian",
            Cuisine::SouthIndian => "South Indian",
            Cuisine::Chinese => "Chinese",
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
            Cuisine::FastFood => "Fast Food",
            Cuisine::Desserts => "Desserts",
            Cuisine::Beverages => "Beverages",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Terms listed under "Popular Searches"
pub const POPULAR_SEARCHES: [&str; 10] = [
    "Butter Chicken",
    "Pizza",
    "Biryani",
    "Chinese",
    "Burger",
    "Dosa",
    "North Indian",
    "South Indian",
    "Italian",
    "Desserts",
];

/// An entry under "Trending Now"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingItem {
    pub name: &'static str,
    pub trend: &'static str,
}

pub const TRENDING: [TrendingItem; 3] = [
    TrendingItem {
        name: "Chicken Biryani",
        trend: "+15% searches today",
    },
    TrendingItem {
        name: "Pizza",
        trend: "+8% searches today",
    },
    TrendingItem {
        name: "Burgers",
        trend: "+5% searches today",
    },
];

/// Delivery platform a price was quoted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Swiggy,
    Zomato,
    #[serde(rename = "magicpin")]
    Magicpin,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Swiggy => "Swiggy",
            Platform::Zomato => "Zomato",
            Platform::Magicpin => "magicpin",
        };
        f.write_str(name)
    }
}

/// One platform's quote for a dish. Amounts are in rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformOffer {
    pub platform: Platform,
    pub price: u32,
    #[serde(default)]
    pub delivery_fee: u32,
    pub eta_minutes: u32,
}

impl PlatformOffer {
    pub fn total(&self) -> u32 {
        self.price.saturating_add(self.delivery_fee)
    }
}

/// A dish at a restaurant with its quotes across platforms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u32,
    pub restaurant: String,
    pub dish: String,
    pub cuisine: Cuisine,
    pub rating: f32,
    pub offers: Vec<PlatformOffer>,
}

impl SearchResult {
    /// Cheapest offer by total (price plus delivery fee)
    pub fn best_offer(&self) -> Option<&PlatformOffer> {
        self.offers.iter().min_by_key(|offer| offer.total())
    }
}

const BUNDLED_RESULTS: &str = include_str!("../assets/mock_results.json");

/// The mock result collection shipped with the binary.
pub fn bundled_results() -> Result<Vec<SearchResult>, CatalogError> {
    parse_results(BUNDLED_RESULTS)
}

pub fn parse_results(json: &str) -> Result<Vec<SearchResult>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a replacement mock collection from disk.
pub fn load_results(path: &Path) -> Result<Vec<SearchResult>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_results(&contents)
}
