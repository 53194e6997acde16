use comfy_table::{Cell, Color};

use crate::calculator::{CostBreakdown, Provider, PROVIDERS, SCENARIOS, UsageParameters};
use crate::catalog::Service;
use crate::currency::{Currency, convert_price, format_amount, format_price};
use crate::output::format::{create_styled_table, format_count, format_usd, header_cell, right_cell};

pub(crate) fn print_catalog_table(services: &[&Service], currency: Currency, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Service", use_color),
        header_cell("Category", use_color),
        header_cell("Price", use_color),
    ]);

    for svc in services {
        let display = convert_price(svc.base_price, currency);
        let color = if use_color && svc.is_on_request() {
            Some(Color::Yellow)
        } else {
            None
        };
        table.add_row(vec![
            Cell::new(svc.name),
            Cell::new(svc.category.label()),
            right_cell(&format_price(display, currency), color, false),
        ]);
    }

    println!("{table}");
    println!(
        "\n  {} services · prices in {}\n",
        services.len(),
        currency.code()
    );
}

pub(crate) fn print_costs_table(
    provider: &Provider,
    usage: UsageParameters,
    costs: &CostBreakdown,
    use_color: bool,
) {
    let code = costs.currency.code();
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("", use_color),
        header_cell("USD", use_color),
        header_cell(code, use_color),
    ]);

    table.add_row(vec![
        Cell::new("Input / request"),
        right_cell(&format_usd(costs.input_cost_usd), None, false),
        right_cell("", None, false),
    ]);
    table.add_row(vec![
        Cell::new("Output / request"),
        right_cell(&format_usd(costs.output_cost_usd), None, false),
        right_cell("", None, false),
    ]);
    table.add_row(vec![
        Cell::new("Per request"),
        right_cell(&format_usd(costs.per_request_usd), None, true),
        right_cell(
            &format_amount(costs.per_request_local, costs.currency, 2),
            None,
            true,
        ),
    ]);
    let monthly_color = if use_color { Some(Color::Green) } else { None };
    table.add_row(vec![
        Cell::new("Per month"),
        right_cell(&format_usd(costs.monthly_usd), monthly_color, true),
        right_cell(
            &format_amount(costs.monthly_local, costs.currency, 2),
            monthly_color,
            true,
        ),
    ]);

    println!("{table}");
    println!(
        "\n  {} · {} in / {} out tokens · {} requests/mo\n",
        provider.name,
        format_count(usage.input_tokens),
        format_count(usage.output_tokens),
        format_count(usage.requests_per_month)
    );
}

pub(crate) fn print_providers_table(use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Provider", use_color),
        header_cell("Id", use_color),
        header_cell("Input $/1K", use_color),
        header_cell("Output $/1K", use_color),
    ]);

    for p in PROVIDERS {
        table.add_row(vec![
            Cell::new(p.name),
            Cell::new(p.id),
            right_cell(&format!("${:.5}", p.rate.input_per_1k_usd), None, false),
            right_cell(&format!("${:.5}", p.rate.output_per_1k_usd), None, false),
        ]);
    }

    println!("{table}");
}

pub(crate) fn print_scenarios_table(use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Scenario", use_color),
        header_cell("Id", use_color),
        header_cell("Input", use_color),
        header_cell("Output", use_color),
        header_cell("Requests/mo", use_color),
    ]);

    for s in SCENARIOS {
        table.add_row(vec![
            Cell::new(s.name),
            Cell::new(s.id),
            right_cell(&format_count(s.usage.input_tokens), None, false),
            right_cell(&format_count(s.usage.output_tokens), None, false),
            right_cell(&format_count(s.usage.requests_per_month), None, false),
        ]);
    }

    println!("{table}");
}
