mod csv;
mod format;
mod json;
mod table;

pub(crate) use csv::{catalog_csv, costs_csv, providers_csv, scenarios_csv};
pub(crate) use json::{catalog_json, convert_json, costs_json, providers_json, scenarios_json};
pub(crate) use table::{
    print_catalog_table, print_costs_table, print_providers_table, print_scenarios_table,
};
