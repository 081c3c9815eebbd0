pub mod blob;
pub mod droplet;
pub mod frame;
pub mod tendril;
pub mod vein;
