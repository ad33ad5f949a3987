pub mod error;
pub mod model;
pub mod parser;
pub mod profiles;
pub mod recommend;
pub mod scorer;
