use crate::format::Formatter;
use crate::models::Product;

/// One rendered product card, in source array order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub image_url: Option<String>,
    pub name: String,
    pub description: Option<String>,
    /// Formatted price line; absent entirely for falsy prices.
    pub price: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProductGridView {
    #[default]
    Placeholder,
    Cards(Vec<ProductCardView>),
}

impl ProductGridView {
    pub fn cards(&self) -> &[ProductCardView] {
        match self {
            ProductGridView::Placeholder => &[],
            ProductGridView::Cards(cards) => cards,
        }
    }
}

/// Rebuild the product grid from scratch.
pub fn render(products: &[Product], formatter: &Formatter) -> ProductGridView {
    if products.is_empty() {
        return ProductGridView::Placeholder;
    }

    let cards = products
        .iter()
        .map(|product| ProductCardView {
            image_url: product.image_url.clone().filter(|u| !u.trim().is_empty()),
            name: product
                .name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "unnamed product".to_string()),
            description: product
                .description
                .clone()
                .filter(|d| !d.trim().is_empty()),
            // A zero or absent price renders no price element at all.
            price: match product.price {
                Some(value) if value != 0.0 => {
                    Some(formatter.price(value, product.currency.as_deref()))
                }
                _ => None,
            },
        })
        .collect();

    ProductGridView::Cards(cards)
}
