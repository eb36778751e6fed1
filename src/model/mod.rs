pub mod branch;
pub mod component;
pub mod configuration;
pub mod location;

pub use branch::*;
pub use component::*;
pub use configuration::*;
pub use location::*;
