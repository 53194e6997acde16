use crate::calculator::{CostBreakdown, PROVIDERS, Provider, SCENARIOS, UsageParameters};
use crate::catalog::Service;
use crate::currency::{Currency, convert_price, format_price};

fn price_json_value(display: f64) -> serde_json::Value {
    if display == 0.0 {
        serde_json::Value::Null
    } else {
        serde_json::json!(display)
    }
}

pub(crate) fn catalog_json(services: &[&Service], currency: Currency) -> String {
    let output: Vec<serde_json::Value> = services
        .iter()
        .map(|svc| {
            let display = convert_price(svc.base_price, currency);
            serde_json::json!({
                "id": svc.id,
                "name": svc.name,
                "category": svc.category.label(),
                "base_price": svc.base_price,
                "display_price": price_json_value(display),
                "formatted": format_price(display, currency),
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap()
}

pub(crate) fn convert_json(base_amount: i64, currency: Currency) -> String {
    let display = convert_price(base_amount, currency);
    let output = serde_json::json!({
        "currency": currency.code(),
        "base_amount": base_amount,
        "display_price": price_json_value(display),
        "formatted": format_price(display, currency),
    });
    serde_json::to_string_pretty(&output).unwrap()
}

pub(crate) fn costs_json(
    provider: &Provider,
    usage: UsageParameters,
    costs: &CostBreakdown,
) -> String {
    let output = serde_json::json!({
        "provider": provider.id,
        "currency": costs.currency.code(),
        "usage": usage,
        "input_cost_usd": costs.input_cost_usd,
        "output_cost_usd": costs.output_cost_usd,
        "per_request_usd": costs.per_request_usd,
        "per_request_local": costs.per_request_local,
        "monthly_usd": costs.monthly_usd,
        "monthly_local": costs.monthly_local,
    });
    serde_json::to_string_pretty(&output).unwrap()
}

pub(crate) fn providers_json() -> String {
    let output: Vec<serde_json::Value> = PROVIDERS
        .iter()
        .map(|p| {
            serde_json::json!({
                "id": p.id,
                "name": p.name,
                "input_per_1k_usd": p.rate.input_per_1k_usd,
                "output_per_1k_usd": p.rate.output_per_1k_usd,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap()
}

pub(crate) fn scenarios_json() -> String {
    let output: Vec<serde_json::Value> = SCENARIOS
        .iter()
        .map(|s| {
            serde_json::json!({
                "id": s.id,
                "name": s.name,
                "summary": s.summary,
                "input_tokens": s.usage.input_tokens,
                "output_tokens": s.usage.output_tokens,
                "requests_per_month": s.usage.requests_per_month,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap()
}
