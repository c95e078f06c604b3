// Domain layer: record shapes and the seams (reports, storage) the core is written against.

pub mod model;
pub mod ports;
