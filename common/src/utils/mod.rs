pub mod consts;
pub mod coordinate;
pub mod geo;
pub mod json_parser;
pub mod trip;
