pub mod swatch;

pub use swatch::PaletteSwatch;
