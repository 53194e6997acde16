//! Built-in service and plan listings
//!
//! Kept in source rather than fetched or configured; the sales team reprices
//! these a few times a year at most.

use super::types::{Category, Service};

pub(crate) static SERVICES: &[Service] = &[
    Service {
        id: "ai-audit",
        name: "AI Readiness Audit",
        summary: "Two-week review of data, processes and automation candidates",
        category: Category::Consulting,
        base_price: 150_000,
    },
    Service {
        id: "strategy",
        name: "AI Strategy Session",
        summary: "One-day workshop producing an adoption roadmap",
        category: Category::Consulting,
        base_price: 90_000,
    },
    Service {
        id: "chatbot",
        name: "Support Chatbot",
        summary: "LLM-backed assistant integrated with an existing help desk",
        category: Category::Development,
        base_price: 400_000,
    },
    Service {
        id: "automation",
        name: "Process Automation",
        summary: "Document and workflow automation for one business process",
        category: Category::Development,
        base_price: 750_000,
    },
    Service {
        id: "custom-ml",
        name: "Custom ML Model",
        summary: "Bespoke model built and deployed on client infrastructure",
        category: Category::Development,
        base_price: 0,
    },
    Service {
        id: "training",
        name: "Team AI Training",
        summary: "Hands-on course for product and engineering teams",
        category: Category::Training,
        base_price: 250_000,
    },
    Service {
        id: "start",
        name: "Start Plan",
        summary: "Monthly advisory retainer for small teams",
        category: Category::Plan,
        base_price: 150_000,
    },
    Service {
        id: "business",
        name: "Business Plan",
        summary: "Retainer with implementation support and priority response",
        category: Category::Plan,
        base_price: 450_000,
    },
    Service {
        id: "enterprise",
        name: "Enterprise Plan",
        summary: "Dedicated team and custom integration scope",
        category: Category::Plan,
        base_price: 0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = SERVICES.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn prices_are_whole_non_negative_tenge() {
        for svc in SERVICES {
            assert!(svc.base_price >= 0, "{} has negative price", svc.id);
        }
    }

    #[test]
    fn catalog_has_on_request_entries() {
        assert!(SERVICES.iter().any(Service::is_on_request));
    }
}
