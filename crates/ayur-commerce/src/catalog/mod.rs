//! Product catalog module.
//!
//! The marketplace carries a fixed list of products. Listing applies a
//! [`CatalogQuery`]: a case-insensitive search over name and brand, an
//! optional category, and a sort order.

mod category;
mod product;

pub use category::{CatalogQuery, SortOption, ALL_CATEGORIES};
pub use product::Product;

use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;

/// The product list.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

impl Catalog {
    /// A catalog over the given products, in featured order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The marketplace's standard herbal range.
    pub fn default_catalog() -> Self {
        let product = |id: u32,
                       name: &str,
                       brand: &str,
                       price: i64,
                       original: i64,
                       rating: f32,
                       reviews: u32,
                       category: &str,
                       description: &str,
                       benefits: [&str; 3]| Product {
            id: ItemId::new(format!("herb-{}", id)),
            name: name.to_string(),
            brand: brand.to_string(),
            price: Money::inr(price),
            original_price: Some(Money::inr(original)),
            rating,
            reviews,
            image: "/placeholder.svg".to_string(),
            category: category.to_string(),
            description: description.to_string(),
            benefits: benefits.iter().map(|b| b.to_string()).collect(),
        };

        Self::new(vec![
            product(
                1,
                "Ashwagandha Capsules",
                "Dabur",
                299,
                399,
                4.5,
                234,
                "Stress Relief",
                "Premium Ashwagandha extract for stress relief and energy boost",
                ["Reduces stress", "Improves energy", "Better sleep"],
            ),
            product(
                2,
                "Triphala Churna",
                "Baidyanath",
                149,
                199,
                4.3,
                156,
                "Digestive Health",
                "Traditional herbal powder for digestive wellness",
                ["Improves digestion", "Detoxifies body", "Natural laxative"],
            ),
            product(
                3,
                "Brahmi Oil",
                "Hamdard",
                189,
                249,
                4.7,
                89,
                "Mental Wellness",
                "Pure Brahmi oil for mental clarity and hair health",
                ["Enhances memory", "Reduces anxiety", "Healthy hair"],
            ),
            product(
                4,
                "Chyawanprash",
                "Dabur",
                349,
                449,
                4.6,
                312,
                "Immunity",
                "Traditional immunity booster with 40+ herbs",
                ["Boosts immunity", "Rich in vitamin C", "Energy enhancer"],
            ),
            product(
                5,
                "Turmeric Tablets",
                "Himalaya",
                199,
                259,
                4.4,
                178,
                "Anti-inflammatory",
                "Curcumin-rich turmeric for inflammation relief",
                ["Anti-inflammatory", "Joint health", "Antioxidant rich"],
            ),
            product(
                6,
                "Arjuna Capsules",
                "Baidyanath",
                249,
                319,
                4.2,
                95,
                "Heart Health",
                "Arjuna extract for cardiovascular wellness",
                ["Heart health", "Blood pressure support", "Circulation"],
            ),
        ])
    }

    /// Every product in featured order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ItemId) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// `"All"` followed by each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Products matching the query, sorted. Ties keep catalog order.
    pub fn query(&self, query: &CatalogQuery) -> Vec<&Product> {
        let mut results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.matches(p))
            .collect();
        results.sort_by(|a, b| query.sort.compare(a, b));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default_catalog();
        assert_eq!(catalog.products().len(), 6);
        let first = &catalog.products()[0];
        assert_eq!(first.name, "Ashwagandha Capsules");
        assert_eq!(first.price.display(), "₹299");
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            Catalog::default_catalog().categories(),
            vec![
                "All",
                "Stress Relief",
                "Digestive Health",
                "Mental Wellness",
                "Immunity",
                "Anti-inflammatory",
                "Heart Health"
            ]
        );
    }

    #[test]
    fn test_search_by_brand() {
        let catalog = Catalog::default_catalog();
        let names: Vec<_> = catalog
            .query(&CatalogQuery::new().with_search("dabur"))
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ashwagandha Capsules", "Chyawanprash"]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::default_catalog();
        let hits = catalog.query(&CatalogQuery::new().with_category("Immunity"));
        assert_eq!(hits.len(), 1);
        assert_eq!(catalog.query(&CatalogQuery::new().with_category("All")).len(), 6);
        assert!(catalog
            .query(&CatalogQuery::new().with_category("Immunity").with_search("brahmi"))
            .is_empty());
    }

    #[test]
    fn test_sorting() {
        let catalog = Catalog::default_catalog();
        let by_price = catalog.query(&CatalogQuery::new().with_sort(SortOption::PriceLowToHigh));
        assert_eq!(by_price[0].name, "Triphala Churna");
        assert_eq!(by_price[5].name, "Chyawanprash");

        let by_rating = catalog.query(&CatalogQuery::new().with_sort(SortOption::Rating));
        assert_eq!(by_rating[0].name, "Brahmi Oil");

        let by_name = catalog.query(&CatalogQuery::new().with_sort(SortOption::Name));
        assert_eq!(by_name[0].name, "Arjuna Capsules");
    }

    #[test]
    fn test_get_unknown() {
        let err = Catalog::default_catalog()
            .get(&ItemId::new("herb-99"))
            .unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("herb-99".into()));
    }
}
