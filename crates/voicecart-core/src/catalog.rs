//! Product catalog and search predicate
//!
//! The catalog is a read-only fixture loaded once at startup. Matching is
//! case-insensitive throughout; folding happens when products and criteria
//! are constructed, so the predicate itself never touches case.

use serde::Serialize;

/// A catalog entry
///
/// `name` and `brand` keep their display casing; folded copies are cached at
/// construction for matching. Tags are stored lowercase.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub tags: Vec<String>,
    #[serde(skip)]
    name_folded: String,
    #[serde(skip)]
    brand_folded: String,
}

impl Product {
    pub fn new<S: Into<String>>(
        id: u32,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
        tags: impl IntoIterator<Item = S>,
    ) -> Self {
        let name = name.into();
        let brand = brand.into();
        let name_folded = name.to_lowercase();
        let brand_folded = brand.to_lowercase();
        Self {
            id,
            name,
            brand,
            price,
            tags: tags.into_iter().map(|t| t.into().to_lowercase()).collect(),
            name_folded,
            brand_folded,
        }
    }

    /// Whether this product satisfies every supplied criterion
    pub fn matches(&self, criteria: &SearchCriteria) -> bool {
        if let Some(item) = &criteria.item {
            if !self.name_folded.contains(item.as_str()) {
                return false;
            }
        }
        if let Some(brand) = &criteria.brand {
            if !self.brand_folded.contains(brand.as_str()) {
                return false;
            }
        }
        if let Some(max_price) = criteria.max_price {
            if self.price > max_price {
                return false;
            }
        }
        // Tag criteria intersect: every requested tag must be present
        criteria.tags.iter().all(|tag| self.tags.contains(tag))
    }
}

/// Filter fields used to narrow the catalog
///
/// Absent fields impose no constraint. Construction normalizes: item and
/// brand are trimmed and lowercased, tags are lowercased (inner whitespace
/// kept), and non-positive or non-finite price limits are discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    item: Option<String>,
    brand: Option<String>,
    max_price: Option<f64>,
    tags: Vec<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: impl AsRef<str>) -> Self {
        let item = item.as_ref().trim().to_lowercase();
        self.item = if item.is_empty() { None } else { Some(item) };
        self
    }

    pub fn with_brand(mut self, brand: impl AsRef<str>) -> Self {
        let brand = brand.as_ref().trim().to_lowercase();
        self.brand = if brand.is_empty() { None } else { Some(brand) };
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = (max_price.is_finite() && max_price > 0.0).then_some(max_price);
        self
    }

    pub fn with_tags<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags
            .into_iter()
            .map(|tag| tag.as_ref().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        self
    }

    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn max_price(&self) -> Option<f64> {
        self.max_price
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// True when no field constrains the search
    pub fn is_empty(&self) -> bool {
        self.item.is_none() && self.brand.is_none() && self.max_price.is_none() && self.tags.is_empty()
    }
}

/// Read-only product collection
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The mock catalog the assistant ships with
    pub fn fixture() -> Self {
        Self::new(vec![
            Product::new(1, "Organic Gala Apples", "Farm Fresh", 4.50, ["organic", "fruit"]),
            Product::new(2, "Whole Milk", "DairyLand", 3.00, ["dairy"]),
            Product::new(3, "Almond Milk", "NuttyCo", 4.25, ["dairy-free", "vegan"]),
            Product::new(4, "Sourdough Bread", "Bakery Bites", 5.50, ["bakery"]),
            Product::new(5, "Colgate Toothpaste", "Colgate", 3.50, ["personal-care"]),
            Product::new(6, "Crest Toothpaste", "Crest", 4.00, ["personal-care"]),
            Product::new(7, "Organic Eggs", "Farm Fresh", 6.00, ["organic", "dairy"]),
            Product::new(8, "Generic Toothpaste", "Store Brand", 2.50, ["personal-care"]),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products matching all supplied criteria, in catalog order
    ///
    /// Pure and total: no criteria means the whole catalog, no matches means
    /// an empty result, never an error.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.matches(criteria))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(results: &[&Product]) -> Vec<u32> {
        results.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_criteria_returns_full_catalog_in_order() {
        let catalog = Catalog::fixture();
        let results = catalog.search(&SearchCriteria::new());
        assert_eq!(ids(&results), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let catalog = Catalog::fixture();
        let criteria = SearchCriteria::new().with_tags(["personal-care"]);
        let first = ids(&catalog.search(&criteria));
        let second = ids(&catalog.search(&criteria));
        assert_eq!(first, second);
    }

    #[test]
    fn test_brand_match_is_case_insensitive() {
        let catalog = Catalog::fixture();
        let results = catalog.search(&SearchCriteria::new().with_brand("colgate"));
        assert_eq!(ids(&results), vec![5]);
        assert_eq!(results[0].name, "Colgate Toothpaste");
    }

    #[test]
    fn test_item_is_substring_match_on_name() {
        let catalog = Catalog::fixture();
        let results = catalog.search(&SearchCriteria::new().with_item("milk"));
        assert_eq!(ids(&results), vec![2, 3]);
    }

    #[test]
    fn test_tag_criteria_require_every_tag() {
        let catalog = Catalog::fixture();
        let organic = catalog.search(&SearchCriteria::new().with_tags(["organic"]));
        assert_eq!(ids(&organic), vec![1, 7]);

        let organic_dairy =
            catalog.search(&SearchCriteria::new().with_tags(["organic", "dairy"]));
        assert_eq!(ids(&organic_dairy), vec![7]);
    }

    #[test]
    fn test_tag_match_is_case_insensitive() {
        let catalog = Catalog::fixture();
        let results = catalog.search(&SearchCriteria::new().with_tags(["Organic"]));
        assert_eq!(ids(&results), vec![1, 7]);
    }

    #[test]
    fn test_max_price_boundary_is_inclusive() {
        let catalog = Catalog::fixture();

        let at_price = catalog.search(
            &SearchCriteria::new()
                .with_item("toothpaste")
                .with_max_price(2.50),
        );
        assert_eq!(ids(&at_price), vec![8]);

        let below_price = catalog.search(
            &SearchCriteria::new()
                .with_item("toothpaste")
                .with_max_price(2.49),
        );
        assert!(below_price.is_empty());
    }

    #[test]
    fn test_item_and_max_price_combined() {
        let catalog = Catalog::fixture();
        let results = catalog.search(
            &SearchCriteria::new()
                .with_item("toothpaste")
                .with_max_price(3.00),
        );
        assert_eq!(ids(&results), vec![8]);
        assert_eq!(results[0].price, 2.50);
    }

    #[test]
    fn test_no_match_returns_empty_not_error() {
        let catalog = Catalog::fixture();
        let results = catalog.search(&SearchCriteria::new().with_item("caviar"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_criteria_normalization_at_construction() {
        let criteria = SearchCriteria::new()
            .with_item("  Whole Milk ")
            .with_brand(" DairyLand ")
            .with_tags(["Personal-Care", ""]);

        assert_eq!(criteria.item(), Some("whole milk"));
        assert_eq!(criteria.brand(), Some("dairyland"));
        assert_eq!(criteria.tags(), ["personal-care"]);
    }

    #[test]
    fn test_blank_fields_count_as_absent() {
        let criteria = SearchCriteria::new().with_item("   ").with_max_price(-1.0);
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_product_serialization_shape() {
        let product = Product::new(5, "Colgate Toothpaste", "Colgate", 3.50, ["personal-care"]);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 5,
                "name": "Colgate Toothpaste",
                "brand": "Colgate",
                "price": 3.50,
                "tags": ["personal-care"]
            })
        );
    }
}
