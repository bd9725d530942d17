mod compartment;
mod gradient;
mod model;
mod zhl_values;

pub use compartment::{Compartment, CompartmentParams};
pub use gradient::Gradient;
pub use model::{BuhlmannConfig, BuhlmannModel, Model};
pub use zhl_values::{ZHLParam, ZHL_16A_HALF_LIVES};
