//! User-Facing Prompt Text
//!
//! All follow-up questions and notices emitted by the controller, in the
//! product's PT-BR voice. Kept in one place so the conversational tone can
//! be reviewed and changed without touching transition logic.

use fintalk_core::{Category, Draft};

/// Render a monetary value the way the chat displays it, always with two
/// decimals.
pub(crate) fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Question asked when no amount could be extracted. Brand-aware: known
/// merchants get a themed prompt, otherwise the category or the cleaned
/// description anchors the question.
pub(crate) fn missing_amount_question(draft: &Draft) -> String {
    if let Some(brand) = &draft.brand {
        match brand.to_lowercase().as_str() {
            "uber" => {
                return "Vai de Uber? 🚗 Quanto deu a corrida e como você pagou (Crédito/Débito)?"
                    .to_string()
            }
            "ifood" => {
                return "Hum, iFood! 🍔 Quanto custou o pedido e qual foi o pagamento?".to_string()
            }
            "netflix" => {
                return "Netflix time! 🍿 Qual o valor da mensalidade e o cartão?".to_string()
            }
            "spotify" => {
                return "Música é vida! 🎧 Quanto foi a assinatura do Spotify?".to_string()
            }
            "mcdonald's" | "burger king" => {
                return "Lanche top! 🍟 Quanto deu tudo e como pagou?".to_string()
            }
            _ => return format!("Vi que é {}. Quanto foi e qual a forma de pagamento?", brand),
        }
    }

    match draft.category {
        Category::Transport => "Transporte! 🚕 Quanto você gastou e como pagou?".to_string(),
        Category::Food => "Comida! 🍽️ Qual o valor e a forma de pagamento?".to_string(),
        _ => format!("Entendi que é sobre \"{}\". Quanto custou?", draft.description),
    }
}

/// Confirmation question for an installment purchase detected at extraction.
pub(crate) fn confirm_installments_question(draft: &Draft) -> String {
    match draft.installment_plan {
        Some(plan) => format!(
            "Entendi: {} de R${} parcelado em {}x.\n\nA parcela será de R${}. Posso registrar a primeira parcela?",
            draft.description,
            format_amount(plan.total_amount),
            plan.count,
            format_amount(draft.amount),
        ),
        None => format!(
            "Entendi: {} de R${}. Posso registrar?",
            draft.description,
            format_amount(draft.amount),
        ),
    }
}

/// Confirmation question after a plain draft was converted to installments
/// during the details turn.
pub(crate) fn converted_confirm_question(draft: &Draft) -> String {
    match draft.installment_plan {
        Some(plan) => format!(
            "Entendi: {}x de R${}. Posso registrar?",
            plan.count,
            format_amount(draft.amount),
        ),
        None => confirm_installments_question(draft),
    }
}

/// Question asked when a high-value expense lacks a payment method.
pub(crate) fn payment_details_question(draft: &Draft) -> String {
    match draft.installment_plan {
        Some(plan) => format!("Entendi que é em {}x. Foi no Cartão de Crédito?", plan.count),
        None => format!(
            "Valor de R${}. Foi à vista, Pix ou parcelado?",
            format_amount(draft.amount),
        ),
    }
}

pub(crate) fn amount_retry_question() -> String {
    "Ainda não captei o valor. Digite apenas o número, ex: '50'.".to_string()
}

pub(crate) fn installment_count_question() -> String {
    "Parcelado em quantas vezes? (ex: 10x)".to_string()
}

pub(crate) fn details_give_up_message() -> String {
    "Não consegui identificar a forma de pagamento, então vou deixar esse registro de lado. Pode digitar de novo quando quiser.".to_string()
}

pub(crate) fn cancel_message() -> String {
    "Ok, cancelado. Pode digitar novamente se quiser.".to_string()
}
