//! Ordered Category Rules
//!
//! First-match-wins keyword rules for category inference. The order below is
//! intentional: earlier rules shadow later ones (e.g. "extra" the supermarket
//! is matched by Food before Salary's "extra" income sense can fire).

use fintalk_core::Category;
use serde::{Deserialize, Serialize};

/// One category with its keyword set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Whether any keyword appears in the cleaned description or the raw
    /// lowercased utterance
    pub fn matches(&self, description_lower: &str, utterance_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| description_lower.contains(k.as_str()) || utterance_lower.contains(k.as_str()))
    }
}

/// Built-in rule table (PT-BR and EN keywords, merchants included)
pub fn default_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            Category::Food,
            &[
                "groceries", "food", "lunch", "dinner", "breakfast", "snack", "restaurant",
                "coffee", "burger", "pizza", "comida", "almoco", "almoço", "jantar", "cafe",
                "café", "lanche",
                "mercado", "restaurante", "ifood", "delivery", "bar", "mcdonalds", "bk",
                "burger king", "outback", "starbucks", "coco bambu", "subway", "pao de acucar",
                "carrefour", "extra", "dia", "atacadao", "assai", "whole foods", "trader joes",
            ],
        ),
        CategoryRule::new(
            Category::Transport,
            &[
                "uber", "taxi", "bus", "train", "gas", "fuel", "parking", "metro", "transporte",
                "onibus", "trem", "gasolina", "combustivel", "estacionamento", "99", "lyft",
                "shell", "ipiranga", "br", "azul", "gol", "latam", "passagem", "pedagio",
                "sem parar", "veloe",
            ],
        ),
        CategoryRule::new(
            Category::Utilities,
            &[
                "water", "electricity", "internet", "phone", "bill", "rent", "contas", "agua",
                "luz", "energia", "telefone", "aluguel", "net", "vivo", "claro", "tim", "oi",
                "sabesp", "enel", "cpfl", "condominio", "iptu", "ipva",
            ],
        ),
        CategoryRule::new(Category::BillPayment, &["boleto", "fatura", "cobranca"]),
        CategoryRule::new(
            Category::Shopping,
            &[
                "clothes", "shoes", "electronics", "gift", "amazon", "compras", "roupa",
                "sapato", "eletronico", "presente", "loja", "shopping", "mercadolivre",
                "shopee", "shein", "zara", "nike", "adidas", "apple", "aliexpress", "magalu",
                "casas bahia", "fast shop", "macbook", "iphone", "ipad", "notebook", "laptop",
                "computador", "pc", "mouse", "teclado", "monitor", "tv", "televisao", "samsung",
                "lg", "sony", "celular", "smartphone", "tablet", "kindle", "fone", "headphone",
                "camera", "videogame", "game", "console", "ps5", "xbox", "switch",
            ],
        ),
        CategoryRule::new(
            Category::Entertainment,
            &[
                "movie", "netflix", "spotify", "game", "cinema", "concert", "lazer", "filme",
                "jogo", "show", "assinatura", "festa", "hbo", "disney", "prime video", "steam",
                "playstation", "xbox", "ingresso", "sympla", "twitch", "youtube",
            ],
        ),
        CategoryRule::new(
            Category::Health,
            &[
                "doctor", "pharmacy", "gym", "medicine", "hospital", "saude", "medico",
                "farmacia", "academia", "remedio", "drogasil", "smart fit", "bluefit", "raia",
                "pague menos", "unimed", "bradesco saude", "sulamerica", "dentista",
                "psicologo", "terapia",
            ],
        ),
        CategoryRule::new(
            Category::Salary,
            &[
                "salary", "paycheck", "bonus", "salario", "pagamento", "renda", "extra",
                "freelance", "projeto", "venda", "sold",
            ],
        ),
    ]
}
