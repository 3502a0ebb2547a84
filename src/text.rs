pub mod bitmap;
pub mod font;
pub mod layout;
pub mod raster;
