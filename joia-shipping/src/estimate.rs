use serde::{Deserialize, Serialize};

use crate::cep::{is_valid_cep, uf_from_cep};
use crate::region::Region;

/// Flat-rate shipping tier: price in cents plus a delivery window in business
/// days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingTier {
    pub price: i32,
    pub days_min: u8,
    pub days_max: u8,
}

/// A resolved shipping estimate for a destination CEP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingEstimate {
    pub price: i32,
    pub days_min: u8,
    pub days_max: u8,
    pub region: Region,
}

impl Region {
    /// Static tier table. There is no carrier integration; rates are flat per
    /// macro-region, with a nationwide fallback tier.
    pub fn shipping_tier(&self) -> ShippingTier {
        let (price, days_min, days_max) = match self {
            Region::Sudeste => (1500, 3, 5),
            Region::Sul => (1800, 4, 7),
            Region::CentroOeste => (2200, 5, 8),
            Region::Nordeste => (2800, 7, 12),
            Region::Norte => (3500, 10, 15),
            Region::Brasil => (2500, 7, 10),
        };
        ShippingTier {
            price,
            days_min,
            days_max,
        }
    }
}

/// Resolve a shipping estimate from free-text CEP input. Returns `None` for
/// anything that is not a valid, allocated eight-digit CEP; never fails.
pub fn calculate_shipping(raw: &str) -> Option<ShippingEstimate> {
    if !is_valid_cep(raw) {
        return None;
    }
    let uf = uf_from_cep(raw)?;
    let region = Region::from_uf(uf);
    let tier = region.shipping_tier();

    Some(ShippingEstimate {
        price: tier.price,
        days_min: tier.days_min,
        days_max: tier.days_max,
        region,
    })
}
