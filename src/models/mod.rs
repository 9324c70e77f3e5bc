pub mod charge_code;
pub mod entry;
