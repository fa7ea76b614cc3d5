pub mod day;
pub mod session;
pub mod venue;

pub use day::*;
pub use session::*;
pub use venue::*;
