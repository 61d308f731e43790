// Domain layer: request/response models and the ports the gateway depends on.

pub mod model;
pub mod ports;
