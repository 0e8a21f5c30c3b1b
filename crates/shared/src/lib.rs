pub mod annotations;
pub mod constants;
pub mod enums;
pub mod types;

pub use annotations::*;
pub use constants::*;
pub use enums::*;
pub use types::*;
