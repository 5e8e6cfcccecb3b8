// Domain layer: the sample file model and the ports the fetcher talks through.

pub mod model;
pub mod ports;
