pub mod reqwest;
pub mod time;
pub mod validation;
