pub mod camera;
pub mod cloud;
pub mod config;
pub mod constants;
pub mod curtain;
pub mod error;
pub mod field;
pub mod interaction;
pub mod ripple;

pub use camera::*;
pub use cloud::*;
pub use config::*;
pub use constants::*;
pub use curtain::*;
pub use error::FieldError;
pub use field::*;
pub use interaction::*;
pub use ripple::*;
