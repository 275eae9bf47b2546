pub mod button;
pub mod dropdown;
pub mod grid;
pub mod header;
pub mod icons;
pub mod tilt_card;
pub mod toggles;
