//! Theme system providing the surface colors components tint themselves with.
//!
//! Themes support multiple variants (e.g., dark and light modes) with a
//! consistent set of semantic color tokens.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
