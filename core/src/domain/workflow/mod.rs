pub mod entities;
pub mod errors;
pub mod locks;
pub mod machine;
pub mod ports;
pub mod preferences;
pub mod presentation;
pub mod prompts;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use ports::*;
pub use preferences::*;
pub use value_objects::*;
