mod fixed_point;
mod js_number;

pub use fixed_point::to_fixed;
pub use js_number::js_string;
