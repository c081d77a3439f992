//! The [`Rect`] room footprint.

/// An axis-aligned rectangular footprint, used for room stamps.
///
/// `row`/`col` are the top-left corner (may be negative before the
/// rect is shifted into a grid); `height`/`width` are the full extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Top row (inclusive).
    pub row: i32,
    /// Left column (inclusive).
    pub col: i32,
    /// Extent in rows.
    pub height: u32,
    /// Extent in columns.
    pub width: u32,
}

impl Rect {
    /// Footprint of a `width x height` rect centered on `(row, col)`.
    ///
    /// Centering convention: the row offset comes from the rect
    /// *height* and the column offset from the rect *width* — the
    /// top-left corner is `(row - height / 2, col - width / 2)`.
    pub fn centered_at(row: i32, col: i32, width: u32, height: u32) -> Self {
        Self {
            row: row - (height / 2) as i32,
            col: col - (width / 2) as i32,
            height,
            width,
        }
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> i32 {
        self.row + self.height as i32
    }

    /// One past the right column.
    pub fn right(&self) -> i32 {
        self.col + self.width as i32
    }

    /// Translate the rect so its full footprint lies inside a
    /// `rows x cols` grid whenever the grid is large enough.
    ///
    /// The footprint is shifted, never shrunk. On an axis where the
    /// rect exceeds the grid, the translation still guarantees the
    /// rect covers the entire axis; the overhang is clipped by the
    /// caller when stamping.
    pub fn shifted_into(self, rows: u32, cols: u32) -> Self {
        let clamp_axis = |origin: i32, extent: u32, len: u32| -> i32 {
            let slack = len as i32 - extent as i32;
            origin.clamp(slack.min(0), slack.max(0))
        };
        Self {
            row: clamp_axis(self.row, self.height, rows),
            col: clamp_axis(self.col, self.width, cols),
            ..self
        }
    }
}
