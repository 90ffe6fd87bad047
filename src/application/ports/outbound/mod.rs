mod clock_port;
mod random_port;
mod store_port;

pub use clock_port::ClockPort;
pub use random_port::RandomnessPort;
pub use store_port::{StatePort, StoreError};
