//! Catalog data types
//!
//! The catalog is a static list of consulting services and subscription plans.
//! Prices are authored as whole tenge amounts; zero marks an item that is
//! quoted individually.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Category {
    Consulting,
    Development,
    Training,
    Plan,
}

impl Category {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Category::Consulting => "Consulting",
            Category::Development => "Development",
            Category::Training => "Training",
            Category::Plan => "Plan",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Service {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
    pub(crate) category: Category,
    /// Whole tenge; 0 = quoted on request
    pub(crate) base_price: i64,
}

impl Service {
    pub(crate) fn is_on_request(&self) -> bool {
        self.base_price == 0
    }
}
