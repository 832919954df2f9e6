// Domain layer: the profile record, layout selectors and ports. No I/O here.

pub mod builder;
pub mod model;
pub mod ports;
pub mod site;
pub mod template;
