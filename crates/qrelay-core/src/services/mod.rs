//! Application services built on top of the ports.

mod relay;

pub use relay::RelayService;
