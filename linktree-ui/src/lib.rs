pub mod ambient;
pub mod components;
pub mod interop;
pub mod styles;
pub mod theme;

pub use ambient::*;
pub use components::*;
pub use interop::*;
pub use theme::*;
