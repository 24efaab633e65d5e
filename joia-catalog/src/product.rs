use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A single dynamically-priced stone option attached to a product.
///
/// Elements the admin tool saved without a usable name or price are kept as
/// placeholders (empty name, zero price) so that positional `var_<i>` ids stay
/// aligned with the stored array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoneVariation {
    pub name: String,
    pub price: i32,
    pub description: Option<String>,
}

impl StoneVariation {
    /// A variation is selectable only with a non-empty name and nonzero price.
    pub fn is_selectable(&self) -> bool {
        !self.name.is_empty() && self.price != 0
    }
}

/// Core product record, shaped like what the storefront backend persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Base price in integer cents; also the price of the `"main"` variant.
    pub price: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specs: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub collection: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Display label for the base variant; resolver falls back to a fixed
    /// default when absent.
    #[serde(default)]
    pub main_stone_name: Option<String>,

    /// Dynamic variations, persisted upstream either as a structured array or
    /// as a JSON-encoded string. Disambiguated once here, at load time.
    #[serde(default, deserialize_with = "de_stone_variations")]
    pub stone_variations: Vec<StoneVariation>,

    // Legacy fixed variant slots, predating the generic variation list.
    #[serde(default)]
    pub price_diamond_synthetic: Option<i32>,
    #[serde(default)]
    pub description_diamond_synthetic: Option<String>,
    #[serde(default)]
    pub specs_diamond_synthetic: Option<Vec<String>>,
    #[serde(default)]
    pub price_zirconia: Option<i32>,
    #[serde(default)]
    pub description_zirconia: Option<String>,
    #[serde(default)]
    pub specs_zirconia: Option<Vec<String>>,
}

fn default_active() -> bool {
    true
}

impl Product {
    pub fn new(name: impl Into<String>, price: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            description: String::new(),
            specs: Vec::new(),
            image: String::new(),
            category: String::new(),
            collection: String::new(),
            is_new: false,
            is_active: true,
            created_at: Some(Utc::now()),
            main_stone_name: None,
            stone_variations: Vec::new(),
            price_diamond_synthetic: None,
            description_diamond_synthetic: None,
            specs_diamond_synthetic: None,
            price_zirconia: None,
            description_zirconia: None,
            specs_zirconia: None,
        }
    }
}

/// Accepts the stored variation field in any of its historical shapes: a
/// structured array, a JSON-encoded string, or garbage. Malformed input
/// degrades to the empty list and never fails the surrounding deserialize.
fn de_stone_variations<'de, D>(deserializer: D) -> Result<Vec<StoneVariation>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(parse_stone_variations(&raw))
}

/// Shared entry point for the string-or-array disambiguation.
pub fn parse_stone_variations(raw: &Value) -> Vec<StoneVariation> {
    match raw {
        Value::Array(items) => items.iter().map(variation_from_value).collect(),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => items.iter().map(variation_from_value).collect(),
            Ok(_) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unparseable stoneVariations field");
                Vec::new()
            }
        },
        _ => Vec::new(),
    }
}

// Lenient per-element conversion: a malformed element still occupies its
// array index, it just becomes unselectable.
fn variation_from_value(value: &Value) -> StoneVariation {
    StoneVariation {
        name: value["name"].as_str().unwrap_or("").to_string(),
        price: value["price"].as_i64().unwrap_or(0) as i32,
        description: value["description"].as_str().map(str::to_string),
    }
}

/// Shop navigation category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Curated product collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_json(variations: Value) -> Value {
        json!({
            "id": Uuid::new_v4(),
            "name": "Anel Solitário Royal",
            "price": 12500,
            "stoneVariations": variations,
        })
    }

    #[test]
    fn test_variations_from_structured_array() {
        let raw = product_json(json!([
            { "name": "Esmeralda", "price": 9900, "description": "Verde intenso" }
        ]));
        let product: Product = serde_json::from_value(raw).unwrap();

        assert_eq!(product.stone_variations.len(), 1);
        assert_eq!(product.stone_variations[0].name, "Esmeralda");
        assert_eq!(product.stone_variations[0].price, 9900);
        assert_eq!(
            product.stone_variations[0].description.as_deref(),
            Some("Verde intenso")
        );
    }

    #[test]
    fn test_variations_from_encoded_string() {
        let raw = product_json(json!(
            r#"[{"name":"Safira","price":8800},{"name":"Rubi","price":10100}]"#
        ));
        let product: Product = serde_json::from_value(raw).unwrap();

        assert_eq!(product.stone_variations.len(), 2);
        assert_eq!(product.stone_variations[1].name, "Rubi");
    }

    #[test]
    fn test_malformed_string_degrades_to_empty() {
        let raw = product_json(json!("not json at all"));
        let product: Product = serde_json::from_value(raw).unwrap();

        assert!(product.stone_variations.is_empty());
    }

    #[test]
    fn test_invalid_element_keeps_its_index() {
        let raw = product_json(json!([
            42,
            { "name": "Topázio", "price": 7700 }
        ]));
        let product: Product = serde_json::from_value(raw).unwrap();

        assert_eq!(product.stone_variations.len(), 2);
        assert!(!product.stone_variations[0].is_selectable());
        assert!(product.stone_variations[1].is_selectable());
    }

    #[test]
    fn test_missing_field_defaults_empty() {
        let raw = json!({
            "id": Uuid::new_v4(),
            "name": "Colar Minimalist Gold",
            "price": 4200,
        });
        let product: Product = serde_json::from_value(raw).unwrap();

        assert!(product.stone_variations.is_empty());
        assert!(product.is_active);
    }
}
