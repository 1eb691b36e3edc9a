mod controlplane;
mod dependency;

pub use controlplane::*;
pub use dependency::*;
