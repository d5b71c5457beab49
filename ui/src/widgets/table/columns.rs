//! Column widths for the information table.

use egui_extras::Column;
use roster_business::{ColumnDef, ColumnKind};

pub const SELECT_WIDTH: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Selection checkbox column followed by one column per definition.
///
/// Tag columns take the remaining width; avatars get a fixed square slot.
pub fn table_columns(columns: &[ColumnDef], avatar_size: f32) -> Vec<Column> {
    let mut widths = Vec::with_capacity(columns.len() + 1);
    widths.push(Column::exact(SELECT_WIDTH));
    widths.extend(columns.iter().map(|column| match column.kind {
        ColumnKind::Image => Column::exact(avatar_size + 16.0),
        ColumnKind::Badge => Column::auto().at_least(80.0),
        ColumnKind::Tags => Column::remainder().at_least(120.0),
        ColumnKind::Text => Column::auto().at_least(100.0),
    }));
    widths
}
