// Adapters layer: concrete implementations behind the domain ports.

pub mod memory;
pub mod token;
