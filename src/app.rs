use crate::calculator::{UsageParameters, apply_scenario, calculate_costs, find_provider};
use crate::catalog::{CatalogQuery, CatalogSort, Category, SERVICES, Service, select};
use crate::cli::{Cli, Commands};
use crate::currency::{convert_price, format_price};
use crate::error::AppError;
use crate::output::{
    catalog_csv, catalog_json, convert_json, costs_csv, costs_json, print_catalog_table,
    print_costs_table, print_providers_table, print_scenarios_table, providers_csv,
    providers_json, scenarios_csv, scenarios_json,
};

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Some(Commands::Catalog {
            search,
            category,
            sort,
        }) => handle_catalog(cli, search.clone(), *category, *sort),
        None => handle_catalog(cli, None, None, CatalogSort::default()),
        Some(Commands::Convert { amount }) => handle_convert(cli, *amount),
        Some(Commands::Calc {
            provider,
            scenario,
            input_tokens,
            output_tokens,
            requests,
        }) => handle_calc(
            cli,
            provider,
            scenario.as_deref(),
            *input_tokens,
            *output_tokens,
            *requests,
        ),
        Some(Commands::Providers) => {
            if cli.json {
                println!("{}", providers_json());
            } else if cli.csv {
                print!("{}", providers_csv());
            } else {
                print_providers_table(cli.use_color());
            }
            Ok(())
        }
        Some(Commands::Scenarios) => {
            if cli.json {
                println!("{}", scenarios_json());
            } else if cli.csv {
                print!("{}", scenarios_csv());
            } else {
                print_scenarios_table(cli.use_color());
            }
            Ok(())
        }
    }
}

fn handle_catalog(
    cli: &Cli,
    search: Option<String>,
    category: Option<Category>,
    sort: CatalogSort,
) -> Result<(), AppError> {
    let query = CatalogQuery {
        search,
        category,
        sort,
        order: cli.sort_order(),
    };
    let services: Vec<&Service> = select(SERVICES, &query);
    if services.is_empty() {
        println!("No services match the query.");
        return Ok(());
    }

    let currency = cli.display_currency();
    if cli.json {
        println!("{}", catalog_json(&services, currency));
    } else if cli.csv {
        print!("{}", catalog_csv(&services, currency));
    } else {
        print_catalog_table(&services, currency, cli.use_color());
    }
    Ok(())
}

fn handle_convert(cli: &Cli, amount: i64) -> Result<(), AppError> {
    if amount < 0 {
        return Err(AppError::InvalidAmount { input: amount });
    }
    let currency = cli.display_currency();
    if cli.json {
        println!("{}", convert_json(amount, currency));
    } else {
        println!("{}", format_price(convert_price(amount, currency), currency));
    }
    Ok(())
}

fn handle_calc(
    cli: &Cli,
    provider_id: &str,
    scenario: Option<&str>,
    input_tokens: Option<i64>,
    output_tokens: Option<i64>,
    requests: Option<i64>,
) -> Result<(), AppError> {
    let provider = find_provider(provider_id).ok_or_else(|| AppError::UnknownProvider {
        input: provider_id.to_string(),
    })?;

    let usage = match scenario {
        Some(id) => {
            if input_tokens.is_some() || output_tokens.is_some() || requests.is_some() {
                return Err(AppError::ScenarioConflict);
            }
            apply_scenario(id).ok_or_else(|| AppError::UnknownScenario {
                input: id.to_string(),
            })?
        }
        // Cleared or negative fields count as zero usage
        None => UsageParameters {
            input_tokens: input_tokens.unwrap_or(0).max(0),
            output_tokens: output_tokens.unwrap_or(0).max(0),
            requests_per_month: requests.unwrap_or(0).max(0),
        },
    };

    let currency = cli.display_currency();
    let costs = calculate_costs(&provider.rate, usage, currency);
    if cli.json {
        println!("{}", costs_json(provider, usage, &costs));
    } else if cli.csv {
        print!("{}", costs_csv(provider, usage, &costs));
    } else {
        print_costs_table(provider, usage, &costs, cli.use_color());
    }
    Ok(())
}
