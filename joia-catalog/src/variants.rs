use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Label used for the base variant when the product carries no
/// `main_stone_name`.
pub const DEFAULT_MAIN_LABEL: &str = "Diamante Natural";

/// Placeholder shown when no variant label can be resolved at all. Rule 1
/// guarantees at least the main option, so this is unreachable in practice
/// but the fallback must exist.
pub const PLACEHOLDER_LABEL: &str = "Selecione";

const SYNTHETIC_LABEL: &str = "Diamante Sintético";
const ZIRCONIA_LABEL: &str = "Zircônia";

/// A selectable stone option derived from a product. Never persisted; ids are
/// positional and only stable within a single resolution call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoneOption {
    pub id: String,
    pub label: String,
    pub price: i32,
}

// Parsed form of the string ids the presentation layer passes back.
enum VariantKey {
    Main,
    Dynamic(usize),
    Synthetic,
    Zirconia,
}

impl VariantKey {
    fn parse(id: &str) -> Option<Self> {
        match id {
            "main" => Some(Self::Main),
            "synthetic" => Some(Self::Synthetic),
            "zirconia" => Some(Self::Zirconia),
            other => other
                .strip_prefix("var_")
                .and_then(|n| n.parse::<usize>().ok())
                .map(Self::Dynamic),
        }
    }
}

/// Enumerate the selectable options for a product, in fixed order: the main
/// option first, then dynamic variations by array position, then the legacy
/// synthetic and zirconia slots.
pub fn stone_options(product: &Product) -> Vec<StoneOption> {
    let mut options = vec![StoneOption {
        id: "main".to_string(),
        label: product
            .main_stone_name
            .clone()
            .unwrap_or_else(|| DEFAULT_MAIN_LABEL.to_string()),
        price: product.price,
    }];

    for (index, variation) in product.stone_variations.iter().enumerate() {
        if variation.is_selectable() {
            options.push(StoneOption {
                id: format!("var_{index}"),
                label: variation.name.clone(),
                price: variation.price,
            });
        }
    }

    if let Some(price) = product.price_diamond_synthetic.filter(|p| *p != 0) {
        options.push(StoneOption {
            id: "synthetic".to_string(),
            label: SYNTHETIC_LABEL.to_string(),
            price,
        });
    }
    if let Some(price) = product.price_zirconia.filter(|p| *p != 0) {
        options.push(StoneOption {
            id: "zirconia".to_string(),
            label: ZIRCONIA_LABEL.to_string(),
            price,
        });
    }

    options
}

/// True iff the product offers a choice beyond the base stone.
pub fn has_variations(product: &Product) -> bool {
    stone_options(product).len() > 1
}

/// Price for the selected option; an unknown id silently falls back to the
/// base price.
pub fn price_for(product: &Product, variant_id: &str) -> i32 {
    stone_options(product)
        .into_iter()
        .find(|o| o.id == variant_id)
        .map(|o| o.price)
        .unwrap_or(product.price)
}

/// Label for the selected option, falling back to the first listed option.
pub fn label_for(product: &Product, variant_id: &str) -> String {
    let options = stone_options(product);
    options
        .iter()
        .find(|o| o.id == variant_id)
        .or_else(|| options.first())
        .map(|o| o.label.clone())
        .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string())
}

/// Description for the selected option. Legacy fixed-slot overrides win over
/// dynamic variation descriptions, which win over the base description.
pub fn description_for<'a>(product: &'a Product, variant_id: &str) -> &'a str {
    let override_desc = match VariantKey::parse(variant_id) {
        Some(VariantKey::Synthetic) => product.description_diamond_synthetic.as_deref(),
        Some(VariantKey::Zirconia) => product.description_zirconia.as_deref(),
        Some(VariantKey::Dynamic(n)) => product
            .stone_variations
            .get(n)
            .and_then(|v| v.description.as_deref()),
        _ => None,
    };
    override_desc.unwrap_or(&product.description)
}

/// Spec list for the selected option. Only the legacy fixed slots carry a
/// specs override; dynamic variations fall through to the base specs.
pub fn specs_for<'a>(product: &'a Product, variant_id: &str) -> &'a [String] {
    let override_specs = match VariantKey::parse(variant_id) {
        Some(VariantKey::Synthetic) => product.specs_diamond_synthetic.as_deref(),
        Some(VariantKey::Zirconia) => product.specs_zirconia.as_deref(),
        _ => None,
    };
    override_specs.unwrap_or(&product.specs)
}
