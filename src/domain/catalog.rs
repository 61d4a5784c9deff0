use std::collections::HashSet;
use std::fmt;

use super::{Product, ProductId};

/// The fixed list of products a machine is stocked with. Built once at
/// startup and never modified: there are no add/remove operations, only
/// lookups. Construction enforces that ids are unique, costs are
/// non-negative and the list is not empty.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<ProductId> = HashSet::new();
        for product in &products {
            if product.cost < 0 {
                return Err(CatalogError::NegativeCost(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self { products })
    }

    /// The catalog the machine ships with when no catalog file is given.
    pub fn standard() -> Self {
        // Ids are distinct by inspection, so this bypasses `new`.
        Self {
            products: vec![
                Product::drink(1, "Coca-Cola", 15, 330),
                Product::snack(2, "Chips", 20, 150),
                Product::toy(3, "Action Figure", 50, "Plastic"),
            ],
        }
    }

    /// Build a catalog from a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::new(products)
    }

    /// Look up a product by its id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Empty,
    DuplicateId(ProductId),
    NegativeCost(ProductId),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no products"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate product id: {}", id),
            CatalogError::NegativeCost(id) => {
                write!(f, "product {} has a negative cost", id)
            }
            CatalogError::Parse(err) => write!(f, "invalid catalog JSON: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.products().len(), 3);
        assert_eq!(catalog.get(1).unwrap().name, "Coca-Cola");
        assert_eq!(catalog.get(2).unwrap().name, "Chips");
        assert_eq!(catalog.get(3).unwrap().name, "Action Figure");
    }

    #[test]
    fn test_lookup_missing_id() {
        let catalog = Catalog::standard();
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::new(vec![
            Product::toy(7, "Dice", 10, "Plastic"),
            Product::drink(2, "Fanta", 12, 330),
        ])
        .unwrap();

        let ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![7, 2]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            Product::drink(1, "Coca-Cola", 15, 330),
            Product::snack(1, "Chips", 20, 150),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "id": 1, "name": "Coca-Cola", "cost": 15, "kind": { "drink": { "volume_ml": 330 } } },
            { "id": 2, "name": "Chips", "cost": 20, "kind": { "snack": { "weight_g": 150 } } },
            { "id": 3, "name": "Action Figure", "cost": 50, "kind": { "toy": { "material": "Plastic" } } }
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.products().len(), 3);
        assert_eq!(catalog.get(3).unwrap().describe(), "Id: 3, Name: Action Figure, Cost: 50kr, Material: Plastic");
    }

    #[test]
    fn test_from_json_rejects_negative_cost() {
        let json = r#"[
            { "id": 1, "name": "Cola", "cost": -15, "kind": { "drink": { "volume_ml": 330 } } }
        ]"#;
        let result = Catalog::from_json_str(json);
        assert!(matches!(result, Err(CatalogError::NegativeCost(1))));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = Catalog::from_json_str("not json at all");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
