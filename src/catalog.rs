//! Static storefront content. Everything here is compiled in; nothing is
//! fetched at runtime.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: &'static str,
    pub discount: Option<&'static str>,
    pub image: Option<&'static str>,
    pub hover_image: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collection {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HotspotProduct {
    pub id: u32,
    pub category: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub image: Option<&'static str>,
}

/// Marker placed on an image, in percent of the image box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hotspot {
    pub top: f64,
    pub left: f64,
    pub product: HotspotProduct,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroSlide {
    pub image: &'static str,
    pub alt: &'static str,
    pub hotspots: &'static [Hotspot],
}

/// Menus that open a floating panel from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavMenu {
    Shop,
    Collections,
    Country,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub menu: Option<NavMenu>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Cleansers,
    Lotions,
    Moisturizers,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cleansers, Category::Lotions, Category::Moisturizers];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cleansers => "Cleansers",
            Category::Lotions => "Lotions",
            Category::Moisturizers => "Moisturizers",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Formula,
    CrueltyFree,
    Approved,
    Shipping,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BenefitIcon {
    NoChemicals,
    PlantBased,
    Ethical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenefitItem {
    pub icon: BenefitIcon,
    pub text: &'static str,
}

/// A run of quote text, emphasized runs render in italics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteRun {
    Plain(&'static str),
    Emphasis(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static [QuoteRun],
    pub reviewer: &'static str,
    pub badge: &'static str,
    pub stars: u8,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReviewSummary {
    pub rating: f64,
    pub count: u32,
}

impl ReviewSummary {
    /// `4.7 (1,109 reviews)`
    pub fn label(&self) -> String {
        format!("{:.1} ({} reviews)", self.rating, group_thousands(self.count))
    }
}

fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub const LOGO: &str = "/images/kanva-logo.webp";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Shop +", href: "#", menu: Some(NavMenu::Shop) },
    NavItem { label: "Collections +", href: "#", menu: Some(NavMenu::Collections) },
    NavItem { label: "About", href: "#", menu: None },
    NavItem { label: "Blog", href: "#", menu: None },
    NavItem { label: "Contact", href: "#", menu: None },
];

pub const SHOP_MENU: &[MenuItem] = &[
    MenuItem { label: "All Products", href: "#" },
    MenuItem { label: "Cleansers", href: "#" },
    MenuItem { label: "Lotions", href: "#" },
    MenuItem { label: "Moisturizers", href: "#" },
];

pub const SHOP_PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Glow Milk",
        price: "$10.00",
        discount: Some("57% OFF"),
        image: Some("/images/products/glow-milk1.png"),
        hover_image: Some("/images/products/glow-milk2.jpg"),
    },
    Product {
        id: 2,
        name: "Hydra Drops",
        price: "$11.00",
        discount: Some("54% OFF"),
        image: Some("/images/products/hydra-drops1.png"),
        hover_image: Some("/images/products/hydra-drops2.jpg"),
    },
];

pub const COLLECTIONS: &[Collection] = &[
    Collection { id: 1, name: "Cleansers", image: "/images/collection-cleansers.webp", href: "#" },
    Collection { id: 2, name: "Lotions", image: "/images/collection-lotions.webp", href: "#" },
    Collection { id: 3, name: "Moisturizers", image: "/images/collection-moisturizers.webp", href: "#" },
];

pub const COUNTRIES: &[Country] = &[
    Country { code: "usa", name: "United States (USD)", flag: "/images/usa.svg" },
    Country { code: "ger", name: "Germany (EUR)", flag: "/images/Ger.svg" },
    Country { code: "fr", name: "Czechia (CZK)", flag: "/images/fr.svg" },
];

pub fn default_country() -> Country {
    COUNTRIES[0]
}

/// Countries offered by the selector, i.e. all but the selected one.
pub fn other_countries(selected: &Country) -> impl Iterator<Item = &'static Country> + '_ {
    COUNTRIES.iter().filter(move |c| c.code != selected.code)
}

const HYDRA: (&str, &str) = ("/images/products/hydra-drops1.png", "/images/products/hydra-drops2.jpg");
const GLOW: (&str, &str) = ("/images/products/glow-milk1.png", "/images/products/glow-milk2.jpg");
const CREAM: (&str, &str) = ("/images/products/daily-cream1.png", "/images/products/daily-cream2.jpg");

const fn product(
    id: u32,
    name: &'static str,
    price: &'static str,
    discount: Option<&'static str>,
    images: (&'static str, &'static str),
) -> Product {
    Product { id, name, price, discount, image: Some(images.0), hover_image: Some(images.1) }
}

const CLEANSERS: &[Product] = &[
    product(1, "Hydra Drops Cleanser", "$29.99", Some("20% OFF"), HYDRA),
    product(2, "Gentle Foam Cleanser", "$24.99", None, HYDRA),
    product(3, "Purifying Gel Cleanser", "$26.99", Some("10% OFF"), HYDRA),
];

const LOTIONS: &[Product] = &[
    product(4, "Glow Milk Lotion", "$34.99", Some("15% OFF"), GLOW),
    product(5, "Nourishing Body Lotion", "$27.99", None, GLOW),
    product(6, "Silk Touch Lotion", "$32.99", Some("12% OFF"), GLOW),
];

const MOISTURIZERS: &[Product] = &[
    product(7, "Daily Cream Moisturizer", "$39.99", Some("25% OFF"), CREAM),
    product(8, "Intensive Hydration Cream", "$44.99", None, CREAM),
    product(9, "Night Repair Moisturizer", "$49.99", Some("18% OFF"), CREAM),
];

pub fn best_selling(category: Category) -> &'static [Product] {
    match category {
        Category::Cleansers => CLEANSERS,
        Category::Lotions => LOTIONS,
        Category::Moisturizers => MOISTURIZERS,
    }
}

const DAILY_CREAM: HotspotProduct = HotspotProduct {
    id: 1,
    category: "Moisturizers",
    name: "Daily Cream",
    price: "$39.99",
    image: Some("/images/products/daily-cream1.png"),
};

const HYDRA_DROPS: HotspotProduct = HotspotProduct {
    id: 2,
    category: "Serums",
    name: "Hydra Drops",
    price: "$29.99",
    image: Some("/images/products/hydra-drops1.png"),
};

const GLOW_MILK: HotspotProduct = HotspotProduct {
    id: 3,
    category: "Lotions",
    name: "Glow Milk",
    price: "$34.99",
    image: Some("/images/products/glow-milk1.png"),
};

/// Markers on the showcase image further down the page.
pub const SHOWCASE_HOTSPOTS: &[Hotspot] = &[
    Hotspot { top: 25.0, left: 33.3, product: DAILY_CREAM },
    Hotspot { top: 50.0, left: 75.0, product: HYDRA_DROPS },
];

pub const SHOWCASE_IMAGE: &str = "/images/product.png";

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        image: "/images/heroimage1.webp",
        alt: "Hero image 1",
        hotspots: &[
            Hotspot { top: 58.0, left: 38.0, product: DAILY_CREAM },
            Hotspot { top: 46.0, left: 62.0, product: GLOW_MILK },
        ],
    },
    HeroSlide {
        image: "/images/heroimage2.webp",
        alt: "Hero image 2",
        hotspots: &[Hotspot { top: 52.0, left: 55.0, product: HYDRA_DROPS }],
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: FeatureIcon::Formula,
        title: "Natural Formula",
        description: "Crafted with pure, skin-loving ingredients for ultimate care.",
    },
    Feature {
        icon: FeatureIcon::CrueltyFree,
        title: "Cruelty-Free",
        description: "Our products are never tested on animals, guaranteed ethical.",
    },
    Feature {
        icon: FeatureIcon::Approved,
        title: "Expert Approved",
        description: "Carefully tested to ensure safety and visible results.",
    },
    Feature {
        icon: FeatureIcon::Shipping,
        title: "Free Shipping",
        description: "Delivered to your doorstep with no extra costs worldwide.",
    },
];

pub const BENEFITS: &[BenefitItem] = &[
    BenefitItem { icon: BenefitIcon::NoChemicals, text: "No Harsh Chemicals" },
    BenefitItem { icon: BenefitIcon::PlantBased, text: "Plant-Based Goodness" },
    BenefitItem { icon: BenefitIcon::Ethical, text: "Ethically Sourced" },
];

pub const BENEFIT_BODY: &[&str] = &[
    "100% natural means every ingredient is",
    "carefully selected from nature to provide",
    "safe, effective, and gentle care for your skin.",
];

pub const REVIEW_SUMMARY: ReviewSummary = ReviewSummary { rating: 4.7, count: 1109 };

/// Reviewer thumbnails next to the rating, with their tilt in degrees.
pub const REVIEWER_IMAGES: &[(&str, f64)] = &[
    ("/images/reviewimage1.webp", -5.0),
    ("/images/reviewimage2.webp", 8.0),
    ("/images/reviewimage3.webp", -3.0),
];

pub const TESTIMONIAL: Testimonial = Testimonial {
    quote: &[
        QuoteRun::Plain("It feels "),
        QuoteRun::Emphasis("healthier"),
        QuoteRun::Plain(", "),
        QuoteRun::Emphasis("smoother"),
        QuoteRun::Plain(" & more "),
        QuoteRun::Emphasis("radiant"),
        QuoteRun::Plain(" than ever. I love knowing I'm using something natural and effective!"),
    ],
    reviewer: "Jennifer K.",
    badge: "Verified Buyer",
    stars: 5,
    image: "/images/reviewimage3.webp",
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_three_distinct_products() {
        let mut ids = HashSet::new();
        for category in Category::ALL {
            let products = best_selling(category);
            assert_eq!(products.len(), 3, "{}", category.label());
            for p in products {
                assert!(ids.insert(p.id), "duplicate product id {}", p.id);
            }
        }
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn selector_never_offers_the_selected_country() {
        for selected in COUNTRIES {
            let offered: Vec<&str> = other_countries(selected).map(|c| c.code).collect();
            assert_eq!(offered.len(), COUNTRIES.len() - 1);
            assert!(!offered.contains(&selected.code));
        }
    }

    #[test]
    fn only_menu_items_open_panels() {
        let menus: Vec<NavMenu> = NAV_ITEMS.iter().filter_map(|i| i.menu).collect();
        assert_eq!(menus, vec![NavMenu::Shop, NavMenu::Collections]);
    }

    #[test]
    fn hotspots_sit_inside_their_image() {
        let all = HERO_SLIDES.iter().flat_map(|s| s.hotspots.iter()).chain(SHOWCASE_HOTSPOTS.iter());
        for spot in all {
            assert!((0.0..=100.0).contains(&spot.top));
            assert!((0.0..=100.0).contains(&spot.left));
        }
    }

    #[test]
    fn review_summary_label() {
        assert_eq!(REVIEW_SUMMARY.label(), "4.7 (1,109 reviews)");
        assert_eq!(ReviewSummary { rating: 5.0, count: 12 }.label(), "5.0 (12 reviews)");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(999), "999");
    }

    #[test]
    fn shop_products_carry_hover_images() {
        assert!(SHOP_PRODUCTS.iter().all(|p| p.hover_image.is_some() && p.discount.is_some()));
    }
}
