//! String validators and formatters

mod format;
mod validate;

pub use format::{format_number, join_if_has_length, wrap_if_has_length, wrap_if_not_zero};
pub use validate::{
    has_length, has_text, is_date, is_date_time, is_email, is_integer, is_mobile, is_number,
    is_phone, is_url,
};
