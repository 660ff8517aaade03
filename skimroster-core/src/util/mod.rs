pub mod day_clock;
pub mod geo_utils;
pub mod token_ops;
