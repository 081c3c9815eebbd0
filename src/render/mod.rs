pub mod backend;
pub mod blend;
pub mod blur;
pub mod compositor;
