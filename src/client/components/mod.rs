pub mod nav_bar;
pub mod overlay_host;
pub mod splash_overlay;
