//! Internal module for keeping track of units.
//! Using pixels when cells are expected is a no no.
//!
//! Units used in this crate:
//!
//! Texture pixel x/y position/length: f32
//! Cell pixel width/height: i32
//! Sheet column/row position/count: i32
//! Cell index: i32

/// Computes how many whole cells of `cell_px` pixels fit into `texture_px` pixels.
///
/// A zero cell length yields an empty grid dimension. A negative one yields a negative count.
pub(crate) fn grid_length(texture_px: f32, cell_px: i32) -> i32 {
    if cell_px == 0 {
        0
    } else {
        (texture_px / cell_px as f32).floor() as i32
    }
}

/// Computes an array length from its (columns, rows) dimensions
pub(crate) const fn cell_length(columns: i32, rows: i32) -> i32 {
    columns.saturating_mul(rows)
}

/// Converts from a cell index to a (column, row) position in a grid `columns` wide.
///
/// Division truncates toward zero, so negative indices land on negative columns and rows.
/// A grid with no columns maps every index to (0, 0).
pub(crate) const fn from_index(i: i32, columns: i32) -> (i32, i32) {
    if columns == 0 {
        (0, 0)
    } else {
        (i.wrapping_rem(columns), i.wrapping_div(columns))
    }
}

/// Converts from a (column, row) position to the pixel position of the cell's top left corner.
pub(crate) fn cell_origin(column: i32, row: i32, cell_width: i32, cell_height: i32) -> (f32, f32) {
    (
        column as f32 * cell_width as f32,
        row as f32 * cell_height as f32,
    )
}
