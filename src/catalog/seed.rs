use super::Product;

fn product(
    product_id: u32,
    product_name: &str,
    category: &str,
    price: u64,
    rating: f64,
    reviews: &[&str],
) -> Product {
    Product {
        product_id,
        product_name: product_name.to_string(),
        category: category.to_string(),
        price,
        rating,
        reviews: reviews.iter().map(|r| r.to_string()).collect(),
    }
}

/// Built-in sample catalog (Indonesian groceries)
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Kopi Arabica Premium 250g",
            "Minuman",
            65_000,
            4.8,
            &[
                "Rasanya enak dan aromanya kuat.",
                "Kopi berkualitas dan tidak terlalu asam.",
                "Tekstur halus dan tidak bikin sakit perut.",
            ],
        ),
        product(
            2,
            "Kopi Robusta Sachet",
            "Minuman",
            15_000,
            4.1,
            &[
                "Harganya murah.",
                "Rasa lumayan untuk harian.",
                "Agak pahit tapi masih oke.",
            ],
        ),
        product(
            3,
            "Teh Hijau Organik",
            "Minuman",
            30_000,
            4.5,
            &[
                "Rasanya segar.",
                "Cocok untuk diet.",
                "Aromanya lembut dan rileks.",
            ],
        ),
        product(
            4,
            "Snack Kentang Pedas",
            "Makanan Ringan",
            12_000,
            4.2,
            &[
                "Pedas dan gurih.",
                "Teksturnya renyah.",
                "Enak buat teman nonton.",
            ],
        ),
        product(
            5,
            "Snack Keju Panggang",
            "Makanan Ringan",
            17_000,
            4.7,
            &[
                "Keju terasa banget.",
                "Tidak terlalu asin.",
                "Cocok untuk camilan.",
            ],
        ),
    ]
}
