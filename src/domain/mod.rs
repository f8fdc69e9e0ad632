// Domain layer: models and ports only, no I/O.

pub mod model;
pub mod ports;
