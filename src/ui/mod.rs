// UI module for Bug Exorcist
// Theme, window icon, and the render methods of ExorcistApp

pub mod icon;
pub mod shell;
pub mod terminal;
pub mod theme;
pub mod views;
