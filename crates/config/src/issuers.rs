//! Card-Issuer Presentation Metadata
//!
//! Pure display data for rendering registered cards (colors, gradients,
//! logos). Consumed by the presentation layer; the core never branches on
//! any of these fields.

use serde::{Deserialize, Serialize};

/// Presentation style for a card issuer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuerStyle {
    /// Stable identifier ("nubank", "visa")
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary brand color, hex
    pub color: String,
    /// Logo URI
    pub logo: String,
    /// Background gradient classes
    pub gradient: String,
    /// Foreground text classes
    pub text: String,
}

impl IssuerStyle {
    fn favicon(id: &str, name: &str, color: &str, domain: &str, gradient: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            logo: format!("https://www.google.com/s2/favicons?domain={}&sz=128", domain),
            gradient: gradient.to_string(),
            text: text.to_string(),
        }
    }

    fn with_logo(id: &str, name: &str, color: &str, logo: &str, gradient: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            logo: logo.to_string(),
            gradient: gradient.to_string(),
            text: text.to_string(),
        }
    }
}

/// Built-in issuer table
pub fn default_issuers() -> Vec<IssuerStyle> {
    vec![
        IssuerStyle::favicon(
            "nubank",
            "Nubank",
            "#820AD1",
            "nubank.com.br",
            "from-[#820AD1] to-[#4F0680]",
            "text-white",
        ),
        IssuerStyle::favicon(
            "inter",
            "Inter",
            "#FF7A00",
            "inter.co",
            "from-[#FF7A00] to-[#F05F00]",
            "text-white",
        ),
        IssuerStyle::favicon(
            "itau",
            "Itaú",
            "#EC7000",
            "itau.com.br",
            "from-[#EC7000] to-[#CF5000]",
            "text-white",
        ),
        IssuerStyle::favicon(
            "xp",
            "XP",
            "#000000",
            "xpi.com.br",
            "from-zinc-900 to-black",
            "text-white",
        ),
        IssuerStyle::favicon(
            "c6",
            "C6 Bank",
            "#242424",
            "c6bank.com.br",
            "from-zinc-800 to-zinc-950",
            "text-white",
        ),
        IssuerStyle::favicon(
            "btg",
            "BTG Pactual",
            "#00295F",
            "btgpactual.com",
            "from-[#00295F] to-[#001E45]",
            "text-white",
        ),
        IssuerStyle::favicon(
            "santander",
            "Santander",
            "#EC0000",
            "santander.com.br",
            "from-[#EC0000] to-[#B30000]",
            "text-white",
        ),
        IssuerStyle::favicon(
            "bradesco",
            "Bradesco",
            "#CC092F",
            "banco.bradesco",
            "from-[#CC092F] to-[#A3001D]",
            "text-white",
        ),
        IssuerStyle::favicon(
            "neon",
            "Neon",
            "#00A4D3",
            "neon.com.br",
            "from-[#00A4D3] to-[#008BB3]",
            "text-white",
        ),
        IssuerStyle::favicon(
            "nomad",
            "Nomad",
            "#FBC530",
            "nomadglobal.com",
            "from-[#FFEE00] to-[#FBC530]",
            "text-zinc-900",
        ),
        IssuerStyle::with_logo(
            "visa",
            "Visa",
            "#1A1F71",
            "https://upload.wikimedia.org/wikipedia/commons/5/5e/Visa_Inc._logo.svg",
            "from-[#1A1F71] to-[#0D1045]",
            "text-white",
        ),
        IssuerStyle::with_logo(
            "mastercard",
            "Mastercard",
            "#EB001B",
            "https://upload.wikimedia.org/wikipedia/commons/2/2a/Mastercard-logo.svg",
            "from-[#EB001B] to-[#BF0016]",
            "text-white",
        ),
        IssuerStyle::favicon(
            "elo",
            "Elo",
            "#00A4E0",
            "elo.com.br",
            "from-black to-zinc-800",
            "text-white",
        ),
        IssuerStyle::favicon(
            "amex",
            "Amex",
            "#277AA9",
            "americanexpress.com",
            "from-[#277AA9] to-[#1A5C80]",
            "text-white",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuer_ids_unique() {
        let issuers = default_issuers();
        let mut ids: Vec<&str> = issuers.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), issuers.len());
    }

    #[test]
    fn test_card_networks_present() {
        let issuers = default_issuers();
        for id in ["visa", "mastercard", "elo", "amex"] {
            assert!(issuers.iter().any(|i| i.id == id), "missing issuer {}", id);
        }
    }
}
