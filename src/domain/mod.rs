// Domain layer: persisted models and ports (interfaces) for the two stores.

pub mod model;
pub mod ports;
