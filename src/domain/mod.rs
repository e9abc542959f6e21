// Domain layer: campaign configuration, cart/rate models and ports (interfaces).

pub mod campaign;
pub mod model;
pub mod ports;
