pub mod greenhouse;
pub mod machinery;
pub mod notifications;
pub mod pens;
pub mod weather;
pub mod world;

pub use greenhouse::*;
pub use machinery::*;
pub use notifications::*;
pub use pens::*;
pub use weather::*;
pub use world::*;
