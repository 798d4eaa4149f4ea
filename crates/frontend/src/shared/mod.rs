pub mod components;
pub mod dom;
pub mod effects;
pub mod icons;
pub mod modal_frame;
pub mod theme;
