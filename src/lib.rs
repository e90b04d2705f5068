pub mod numeric;
pub mod interval;
pub mod bbox;
pub mod ray;

pub mod sampler;
pub mod batch;
pub mod json_structs;
pub mod json_parser;

pub mod prelude;
