// Domain layer: inspection models and ports. No filesystem access happens here.

pub mod model;
pub mod ports;
