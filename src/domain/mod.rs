// Domain layer: tenant model and the ports the adapter implements or consumes.

pub mod model;
pub mod ports;
