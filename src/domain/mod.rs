pub mod gesture;
pub mod dispatch;
pub mod registry;
pub mod policy;

pub use gesture::*;
pub use dispatch::*;
pub use registry::*;
pub use policy::*;
