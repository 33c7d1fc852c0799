//! Static product catalog and store branding.
//!
//! The catalog is compiled in. No persistence, no fetch: the home grid
//! renders exactly this slice. Pictures are referenced by key and
//! resolved by the view layer, mirroring how asset pipelines hand out
//! resource ids rather than pixels.

/// Key naming a product picture. The view layer maps it to embedded
/// artwork and falls back to a placeholder for unknown keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(pub &'static str);

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub image: ImageRef,
    /// Price in whole rupiah.
    pub price_idr: u32,
}

/// Everything the store sells.
pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Kopi Gayo 200g",
        image: ImageRef("kopi"),
        price_idr: 38_500,
    },
    Product {
        name: "Mie Goreng Spesial",
        image: ImageRef("mie"),
        price_idr: 3_500,
    },
    Product {
        name: "Teh Botol 450ml",
        image: ImageRef("teh"),
        price_idr: 5_000,
    },
    Product {
        name: "Beras Premium 5kg",
        image: ImageRef("beras"),
        price_idr: 68_000,
    },
    Product {
        name: "Minyak Goreng 1L",
        image: ImageRef("minyak"),
        price_idr: 19_500,
    },
    Product {
        name: "Sabun Mandi",
        image: ImageRef("sabun"),
        price_idr: 4_500,
    },
    Product {
        name: "Susu UHT Coklat",
        image: ImageRef("susu"),
        price_idr: 6_500,
    },
    Product {
        name: "Roti Tawar",
        image: ImageRef("roti"),
        price_idr: 15_000,
    },
    Product {
        name: "Keripik Kentang",
        image: ImageRef("keripik"),
        price_idr: 12_500,
    },
    Product {
        name: "Air Mineral 600ml",
        image: ImageRef("air"),
        price_idr: 3_000,
    },
];

/// Store identity shown on the Home profile card. Defaults below,
/// overridable from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreProfile {
    pub store_name: String,
    pub owner_name: String,
    pub owner_email: String,
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            store_name: "Alfamind".to_owned(),
            owner_name: "Andi Pratama".to_owned(),
            owner_email: "andi@alfamind.example".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_is_not_empty() {
        assert!(!PRODUCTS.is_empty());
    }

    #[test]
    fn every_product_has_a_name_and_a_price() {
        for product in PRODUCTS {
            assert!(!product.name.is_empty());
            assert!(product.price_idr > 0, "{} has no price", product.name);
        }
    }

    #[test]
    fn image_keys_are_unique() {
        let keys: HashSet<_> = PRODUCTS.iter().map(|p| p.image).collect();
        assert_eq!(keys.len(), PRODUCTS.len());
    }

    #[test]
    fn default_profile_is_complete() {
        let profile = StoreProfile::default();
        assert!(!profile.store_name.is_empty());
        assert!(!profile.owner_name.is_empty());
        assert!(!profile.owner_email.is_empty());
    }
}
