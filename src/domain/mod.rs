// Domain layer: menu models and ports. Only std/serde here.

pub mod model;
pub mod ports;
