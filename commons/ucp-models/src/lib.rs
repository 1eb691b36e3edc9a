pub mod cloud;
pub mod controlplane;
pub mod dependency;
pub mod enums;

pub use cloud::*;
pub use controlplane::*;
pub use dependency::*;
pub use enums::*;
