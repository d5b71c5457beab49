//! Shared color constants for the UI.

use egui::Color32;

/// Fill of badge chips.
pub const COLOR_PRIMARY: Color32 = Color32::from_rgb(25, 118, 210);

/// Fill of tag chips.
pub const COLOR_CHIP: Color32 = Color32::from_rgb(224, 224, 224);

/// Text on tag chips.
pub const COLOR_CHIP_TEXT: Color32 = Color32::from_rgb(33, 33, 33);

/// Placeholder circle for rows without an avatar.
pub const COLOR_AVATAR_PLACEHOLDER: Color32 = Color32::from_rgb(189, 189, 189);

/// Red color for load errors.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
