pub mod profile_handlers;
pub mod system_handlers;
pub mod theme_handlers;

pub use profile_handlers::*;
pub use system_handlers::*;
pub use theme_handlers::*;
