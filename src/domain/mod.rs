// Domain layer: core models and ports (interfaces). No dependencies beyond
// std and the error type.

pub mod model;
pub mod ports;
