//! Progress indication while an exchange is in flight

pub mod spinner;
