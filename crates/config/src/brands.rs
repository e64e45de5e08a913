//! Merchant Brand Table
//!
//! Recognized merchants with their display assets. Brand detection never
//! alters the description; the brand field is used for analytics and for
//! context-aware follow-up questions.

use serde::{Deserialize, Serialize};

/// A recognized merchant brand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandEntry {
    /// Canonical display name
    pub name: String,
    /// Lowercased keywords that identify the brand in an utterance
    pub keywords: Vec<String>,
    /// Display asset URI (favicon/logo)
    #[serde(default)]
    pub asset: Option<String>,
}

impl BrandEntry {
    fn new(name: &str, keywords: &[&str], domain: &str) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            asset: Some(format!(
                "https://www.google.com/s2/favicons?domain={}&sz=128",
                domain
            )),
        }
    }
}

/// Built-in brand table, first match wins
pub fn default_brands() -> Vec<BrandEntry> {
    vec![
        BrandEntry::new("Netflix", &["netflix"], "netflix.com"),
        BrandEntry::new("Spotify", &["spotify"], "spotify.com"),
        BrandEntry::new("Uber", &["uber"], "uber.com"),
        BrandEntry::new("iFood", &["ifood"], "ifood.com.br"),
        BrandEntry::new("Amazon", &["amazon", "amzn"], "amazon.com"),
        BrandEntry::new(
            "Apple",
            &["apple", "itunes", "app store", "macbook", "iphone", "ipad"],
            "apple.com",
        ),
        BrandEntry::new(
            "McDonald's",
            &["mcdonalds", "mcdonald's", "mc donalds"],
            "mcdonalds.com",
        ),
        BrandEntry::new("Burger King", &["burger king", "bk"], "bk.com"),
        BrandEntry::new("Starbucks", &["starbucks"], "starbucks.com"),
        BrandEntry::new("Shopee", &["shopee"], "shopee.com.br"),
        BrandEntry::new(
            "Mercado Livre",
            &["mercado livre", "mercadolivre"],
            "mercadolivre.com.br",
        ),
        BrandEntry::new("Shein", &["shein"], "shein.com"),
        BrandEntry::new("Zara", &["zara"], "zara.com"),
        BrandEntry::new("Nike", &["nike"], "nike.com"),
        BrandEntry::new("Adidas", &["adidas"], "adidas.com"),
        BrandEntry::new("Nubank", &["nubank", "nu pagamentos"], "nubank.com.br"),
        BrandEntry::new("Smart Fit", &["smart fit", "smartfit"], "smartfit.com.br"),
        BrandEntry::new("Samsung", &["samsung", "galaxy"], "samsung.com"),
    ]
}
