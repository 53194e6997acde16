mod data;
mod query;
mod types;

pub(crate) use data::SERVICES;
pub(crate) use query::{CatalogQuery, CatalogSort, select};
pub(crate) use types::{Category, Service};
