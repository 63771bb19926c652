//! Clock Adapters
//!
//! - **SystemClock** - Local date from the operating system
//! - **FixedClock** - A pinned date (testing, replaying historical checkouts)

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;
