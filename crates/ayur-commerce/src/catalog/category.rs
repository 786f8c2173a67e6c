//! Category filter and sort order for catalog listings.

use crate::catalog::Product;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Pseudo-category that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceLowToHigh,
    /// Sort by price, high to low.
    PriceHighToLow,
    /// Highest rated first.
    Rating,
    /// Sort by name A-Z.
    Name,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::PriceLowToHigh,
        SortOption::PriceHighToLow,
        SortOption::Rating,
        SortOption::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLowToHigh => "price-asc",
            SortOption::PriceHighToLow => "price-desc",
            SortOption::Rating => "rating",
            SortOption::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceLowToHigh => "Price: Low to High",
            SortOption::PriceHighToLow => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Name => "Name: A-Z",
        }
    }

    /// Ordering of two products; `Featured` keeps catalog order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => Ordering::Equal,
            SortOption::PriceLowToHigh => a.price.amount_minor.cmp(&b.price.amount_minor),
            SortOption::PriceHighToLow => b.price.amount_minor.cmp(&a.price.amount_minor),
            SortOption::Rating => b.rating.total_cmp(&a.rating),
            SortOption::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .iter()
            .copied()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| CommerceError::ValidationError(format!("unknown sort option: {}", s)))
    }
}

/// Search text, category and sort order for a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Substring to find in the name or brand; empty matches everything.
    pub search: String,
    /// Category to keep; `None` or `"All"` keeps everything.
    pub category: Option<String>,
    pub sort: SortOption,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a product passes the search and category filters.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => product.category == category,
        };
        category_ok && product.matches_search(&self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_option_parse() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
        assert!("cheapest".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_default_query_is_unfiltered() {
        let q = CatalogQuery::new();
        assert_eq!(q.sort, SortOption::Featured);
        assert!(q.category.is_none());
        assert!(q.search.is_empty());
    }
}
