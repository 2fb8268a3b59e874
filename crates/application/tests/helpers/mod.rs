pub mod fixture_network;

pub use fixture_network::*;
