// Domain layer: models and ports. No HTTP or framework types here.

pub mod model;
pub mod ports;
