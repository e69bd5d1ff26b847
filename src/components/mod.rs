pub mod not_found;
pub mod time_converter;

pub use not_found::NotFound;
pub use time_converter::{HoursInput, TimeConverter, TimeConverterProps};
