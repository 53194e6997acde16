use crate::calculator::{CostBreakdown, PROVIDERS, Provider, SCENARIOS, UsageParameters};
use crate::catalog::Service;
use crate::currency::{Currency, convert_price};

/// Numeric display price for CSV; empty for on-request items. Tenge and ruble
/// prices are whole numbers, dollar prices carry cents.
fn display_price_field(display: f64, currency: Currency) -> String {
    if display == 0.0 {
        return String::new();
    }
    match currency {
        Currency::Usd => format!("{display:.2}"),
        Currency::Kzt | Currency::Rub => format!("{display:.0}"),
    }
}

pub(crate) fn catalog_csv(services: &[&Service], currency: Currency) -> String {
    let mut out = String::from("id,name,category,base_price,display_price\n");
    for svc in services {
        let display = convert_price(svc.base_price, currency);
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            svc.id,
            svc.name,
            svc.category.label(),
            svc.base_price,
            display_price_field(display, currency)
        ));
    }
    out
}

pub(crate) fn providers_csv() -> String {
    let mut out = String::from("id,name,input_per_1k_usd,output_per_1k_usd\n");
    for p in PROVIDERS {
        out.push_str(&format!(
            "{},{},{},{}\n",
            p.id, p.name, p.rate.input_per_1k_usd, p.rate.output_per_1k_usd
        ));
    }
    out
}

pub(crate) fn scenarios_csv() -> String {
    let mut out = String::from("id,name,input_tokens,output_tokens,requests_per_month\n");
    for s in SCENARIOS {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            s.id, s.name, s.usage.input_tokens, s.usage.output_tokens, s.usage.requests_per_month
        ));
    }
    out
}

pub(crate) fn costs_csv(provider: &Provider, usage: UsageParameters, costs: &CostBreakdown) -> String {
    let mut out = String::from(
        "provider,currency,input_tokens,output_tokens,requests_per_month,\
         input_cost_usd,output_cost_usd,per_request_usd,per_request_local,\
         monthly_usd,monthly_local\n",
    );
    out.push_str(&format!(
        "{},{},{},{},{},{},{},{},{},{},{}\n",
        provider.id,
        costs.currency.code(),
        usage.input_tokens,
        usage.output_tokens,
        usage.requests_per_month,
        costs.input_cost_usd,
        costs.output_cost_usd,
        costs.per_request_usd,
        costs.per_request_local,
        costs.monthly_usd,
        costs.monthly_local
    ));
    out
}
