//! Catalog search, filter and sort
//!
//! Operates on borrowed entries from the static catalog. On-request items sort
//! after priced items in price order, whichever direction is requested.

use std::cmp::Ordering;

use clap::ValueEnum;

use crate::cli::SortOrder;

use super::types::{Category, Service};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum CatalogSort {
    /// By base price, on-request entries last
    #[default]
    Price,
    /// Alphabetically by name
    Name,
}

#[derive(Debug, Default)]
pub(crate) struct CatalogQuery {
    pub(crate) search: Option<String>,
    pub(crate) category: Option<Category>,
    pub(crate) sort: CatalogSort,
    pub(crate) order: SortOrder,
}

fn matches_search(svc: &Service, term: &str) -> bool {
    let term = term.to_lowercase();
    svc.name.to_lowercase().contains(&term) || svc.summary.to_lowercase().contains(&term)
}

fn compare_price(a: &Service, b: &Service, order: SortOrder) -> Ordering {
    match (a.is_on_request(), b.is_on_request()) {
        (true, true) => a.name.cmp(b.name),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.base_price.cmp(&b.base_price);
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        }
    }
}

pub(crate) fn select<'a>(services: &'a [Service], query: &CatalogQuery) -> Vec<&'a Service> {
    let mut selected: Vec<&Service> = services
        .iter()
        .filter(|svc| query.category.is_none_or(|c| svc.category == c))
        .filter(|svc| {
            query
                .search
                .as_deref()
                .is_none_or(|term| matches_search(svc, term))
        })
        .collect();

    match query.sort {
        CatalogSort::Price => selected.sort_by(|a, b| compare_price(a, b, query.order)),
        CatalogSort::Name => selected.sort_by(|a, b| {
            let ord = a.name.cmp(b.name);
            match query.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        }),
    }
    selected
}
