//! Fixed catalog of categories and sellers used to seed the market.

/// Number of products generated per seeding run.
pub const PRODUCT_COUNT: usize = 1184;

/// Provenance tag recorded on every generated product.
pub const PROVENANCE_TAG: &str = "nairobi_market";

/// A category to seed, identified by its unique name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// A seller storefront to seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SellerSpec {
    /// Owning user account.
    pub user_id: i64,
    pub store_name: &'static str,
    pub description: &'static str,
    /// Contact number in international format without the leading `+`.
    pub whatsapp_phone: &'static str,
    pub rating: f64,
    pub total_sales: i64,
}

/// Categories in assignment order. Product `i` lands in `CATEGORIES[i % 8]`.
pub const CATEGORIES: [CategorySpec; 8] = [
    CategorySpec {
        name: "Shoes",
        description: "Footwear and sneakers",
    },
    CategorySpec {
        name: "Fashion",
        description: "Clothing and apparel",
    },
    CategorySpec {
        name: "Furniture",
        description: "Home furniture and decor",
    },
    CategorySpec {
        name: "Electronics",
        description: "Electronic devices",
    },
    CategorySpec {
        name: "Accessories",
        description: "Fashion accessories",
    },
    CategorySpec {
        name: "Home Decor",
        description: "Home decoration items",
    },
    CategorySpec {
        name: "Jewelry",
        description: "Jewelry and watches",
    },
    CategorySpec {
        name: "Watches",
        description: "Timepieces",
    },
];

/// Sellers in insertion order. On a fresh database they receive ids 1 through 5.
pub const SELLERS: [SellerSpec; 5] = [
    SellerSpec {
        user_id: 1,
        store_name: "Nairobi Streetwear Hub",
        description: "Premium streetwear and sneakers",
        whatsapp_phone: "254712345678",
        rating: 4.5,
        total_sales: 0,
    },
    SellerSpec {
        user_id: 1,
        store_name: "Westlands Fashion Co",
        description: "Trendy fashion and accessories",
        whatsapp_phone: "254723456789",
        rating: 4.2,
        total_sales: 0,
    },
    SellerSpec {
        user_id: 1,
        store_name: "Gikomba Rare Finds",
        description: "Vintage and rare items",
        whatsapp_phone: "254734567890",
        rating: 4.8,
        total_sales: 0,
    },
    SellerSpec {
        user_id: 1,
        store_name: "Kilimani Tech & Home",
        description: "Electronics and home items",
        whatsapp_phone: "254745678901",
        rating: 4.0,
        total_sales: 0,
    },
    SellerSpec {
        user_id: 1,
        store_name: "Mombasa Road Furniture",
        description: "Quality furniture for homes",
        whatsapp_phone: "254756789012",
        rating: 4.3,
        total_sales: 0,
    },
];

/// Names of all catalog categories, in assignment order.
pub fn category_names() -> Vec<&'static str> {
    CATEGORIES.iter().map(|c| c.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_names_unique() {
        let names: HashSet<_> = CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CATEGORIES.len());
    }

    #[test]
    fn test_category_order() {
        let names = category_names();
        assert_eq!(names.first(), Some(&"Shoes"));
        assert_eq!(names.last(), Some(&"Watches"));
    }

    #[test]
    fn test_seller_stores_unique() {
        let stores: HashSet<_> = SELLERS.iter().map(|s| (s.user_id, s.store_name)).collect();
        assert_eq!(stores.len(), SELLERS.len());
    }
}
