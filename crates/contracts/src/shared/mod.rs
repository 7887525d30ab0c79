pub mod decimal;
pub mod validation;
