/// Support for painting overlays above their siblings.
pub mod deferrable;
