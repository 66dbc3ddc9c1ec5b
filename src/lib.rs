pub mod extensions;

pub mod components;

pub mod theme;

mod utils;
pub use utils::{ElementIdExt, RgbaExt};

mod init;
pub use init::*;
