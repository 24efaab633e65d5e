pub mod cep;
pub mod estimate;
pub mod region;

pub use cep::{is_valid_cep, mask_cep, uf_from_cep};
pub use estimate::{calculate_shipping, ShippingEstimate, ShippingTier};
pub use region::{Region, Uf};
