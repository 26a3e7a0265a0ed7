pub mod info;
pub mod prefix;
pub mod uptime;
pub mod tasks;
pub mod updates;

pub use info::*;
pub use prefix::*;
pub use uptime::*;
pub use tasks::*;
pub use updates::*;

pub const INFO_COLOR: u32 = 0xEC7600;
