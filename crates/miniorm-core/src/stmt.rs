mod bound_value;
pub use bound_value::BoundValue;

mod value;
pub use value::Value;

mod value_decimal;

mod value_jiff;
pub use value_jiff::TIMESTAMP_FORMAT;

mod value_record;
pub use value_record::ValueRecord;
