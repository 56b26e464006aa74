use crate::error::ShapeError;

/// Check that `rows` form a grid that splits into whole 2x2 cells.
///
/// Returns `(width, height)` on success. Checks run in a fixed order:
/// empty input, ragged rows, odd width, odd height.
pub fn check_shape(rows: &[Vec<char>]) -> Result<(usize, usize), ShapeError> {
    let Some(first) = rows.first() else {
        return Err(ShapeError::Empty);
    };
    let width = first.len();

    check_rows_uniform(rows, width)?;

    if width == 0 {
        return Err(ShapeError::Empty);
    }
    if width % 2 != 0 {
        return Err(ShapeError::OddWidth(width));
    }
    if rows.len() % 2 != 0 {
        return Err(ShapeError::OddHeight(rows.len()));
    }

    Ok((width, rows.len()))
}

/// Every row must have the same length as the first.
fn check_rows_uniform(rows: &[Vec<char>], width: usize) -> Result<(), ShapeError> {
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != width {
            return Err(ShapeError::RaggedRow {
                row,
                expected: width,
                found: cells.len(),
            });
        }
    }
    Ok(())
}
