//! Product catalog and the category filter shared by every product listing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    HerbalRoots,
    Powders,
    DriedHerbs,
    Teas,
    Seasoning,
    WellnessBlends,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::HerbalRoots,
        Category::Powders,
        Category::DriedHerbs,
        Category::Teas,
        Category::Seasoning,
        Category::WellnessBlends,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::HerbalRoots => "herbal-roots",
            Category::Powders => "powders",
            Category::DriedHerbs => "dried-herbs",
            Category::Teas => "teas",
            Category::Seasoning => "seasoning",
            Category::WellnessBlends => "wellness-blends",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Whole shillings; the currency has no minor unit here.
    pub price: u64,
    pub category: Category,
    pub image: String,
}

/// Selection applied to a product listing.
///
/// Used for the in-page catalog grid and for server-rendered cards that carry a
/// `data-category` attribute, so both listings agree on what a tag means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    /// `"all"` and the empty string select everything; any other value is a tag.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(raw.to_owned())
        }
    }

    pub fn matches(&self, tag: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(expected) => expected == tag,
        }
    }

    pub fn matches_product(&self, product: &Product) -> bool {
        self.matches(product.category.as_str())
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Tag(tag) => tag,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Tag(category.as_str().to_owned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, keeping the first product seen for each id.
    pub fn new(products: Vec<Product>) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if !unique.iter().any(|p| p.id == product.id) {
                unique.push(product);
            }
        }
        Self { products: unique }
    }

    /// The fixed storefront product list.
    pub fn builtin() -> Self {
        use Category::*;

        let entries: [(u32, &str, u64, Category, &str); 15] = [
            (1, "Ashwagandha Root", 550, HerbalRoots, "images/ashwagandha.jpg"),
            (2, "Mukombero", 400, HerbalRoots, "images/mukombero.jpg"),
            (3, "Onion Powder", 120, Powders, "images/onion_powder.jpg"),
            (4, "Turmeric Powder", 180, Powders, "images/turmeric_powder.jpg"),
            (5, "Cinnamon Sticks", 250, DriedHerbs, "images/cinnamon.jpg"),
            (6, "Clove Buds", 300, DriedHerbs, "images/clove.jpg"),
            (7, "Ginger Powder", 200, Powders, "images/ginger.jpg"),
            (8, "Lemongrass Tea", 350, Teas, "images/lemongrass.jpg"),
            (9, "Chamomile Tea", 400, Teas, "images/chamomile.jpg"),
            (10, "Moringa Leaves", 220, DriedHerbs, "images/moringa.jpg"),
            (11, "Curry Powder", 260, Seasoning, "images/curry.jpg"),
            (12, "Paprika", 190, Powders, "images/paprika.jpg"),
            (13, "Detox Blend", 480, WellnessBlends, "images/detox.jpg"),
            (14, "Immunity Mix", 500, WellnessBlends, "images/immunity.jpg"),
            (15, "Relaxation Tea", 430, Teas, "images/relaxation.jpg"),
        ];

        Self::new(
            entries
                .into_iter()
                .map(|(id, name, price, category, image)| Product {
                    id: ProductId(id),
                    name: name.to_owned(),
                    price,
                    category,
                    image: image.to_owned(),
                })
                .collect(),
        )
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered<'a>(&'a self, filter: &'a CategoryFilter) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| filter.matches_product(p))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
