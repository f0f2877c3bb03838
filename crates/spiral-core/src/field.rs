//! Grids of spirals.
//!
//! A field lays out `rows x columns` copies of one spiral edge to edge. With
//! `alternating` set, every cell whose 1-based `row + column` is even uses the
//! mirrored spiral instead, which gives a checkerboard of left and right turns.

use crate::display_list::Viewport;
use crate::error::{Result, SpiralError};
use crate::matrix::AffineMatrix;
use crate::painter::Painter;
use crate::spiral::{Spiral, SpiralParams, generate_spiral};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    pub spiral: SpiralParams,
    pub rows: u32,
    pub columns: u32,
    pub alternating: bool,
}

impl FieldParams {
    pub fn single(spiral: SpiralParams) -> Self {
        Self {
            spiral,
            rows: 1,
            columns: 1,
            alternating: false,
        }
    }
}

/// Turning direction of a cell's spiral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Built from `offset_ratio`.
    Right,
    /// Built from `1 - offset_ratio`.
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldCell {
    /// 1-based.
    pub row: u32,
    /// 1-based.
    pub column: u32,
    /// Offset of the cell's center from the field's center.
    pub offset: (f64, f64),
    pub turn: Turn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpiralField {
    params: FieldParams,
    right: Spiral,
    left: Spiral,
    cells: Vec<FieldCell>,
}

impl SpiralField {
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn cells(&self) -> &[FieldCell] {
        &self.cells
    }

    pub fn spiral(&self, turn: Turn) -> &Spiral {
        match turn {
            Turn::Right => &self.right,
            Turn::Left => &self.left,
        }
    }

    /// Width and height of the whole grid.
    pub fn size(&self) -> (f64, f64) {
        let edge = self.params.spiral.edge_length;
        (
            self.params.columns as f64 * edge,
            self.params.rows as f64 * edge,
        )
    }

    /// Paint every cell with the field centered in `viewport`.
    pub fn paint(&self, painter: &mut Painter, viewport: Viewport) {
        let half_edge = self.params.spiral.edge_length / 2.0;
        let (cx, cy) = (viewport.width / 2.0, viewport.height / 2.0);
        for cell in &self.cells {
            let (dx, dy) = cell.offset;
            painter.push_transform(AffineMatrix::translation(
                cx + dx - half_edge,
                cy + dy - half_edge,
            ));
            self.spiral(cell.turn).paint(painter);
            painter.pop_transform();
        }
    }
}

/// Build both spirals once and lay out the cells row by row.
pub fn generate_field(params: &FieldParams) -> Result<SpiralField> {
    if params.rows == 0 {
        return Err(SpiralError::invalid_argument("rows", "must be at least 1"));
    }
    if params.columns == 0 {
        return Err(SpiralError::invalid_argument(
            "columns",
            "must be at least 1",
        ));
    }

    let right = generate_spiral(&params.spiral)?;
    let left = generate_spiral(&params.spiral.mirrored())?;

    let edge = params.spiral.edge_length;
    let mut cells = Vec::with_capacity(params.rows as usize * params.columns as usize);
    for row in 1..=params.rows {
        for column in 1..=params.columns {
            let turn = if params.alternating && (row + column) % 2 == 0 {
                Turn::Left
            } else {
                Turn::Right
            };
            let offset = (
                (column as f64 * 2.0 - params.columns as f64 - 1.0) * edge / 2.0,
                (row as f64 * 2.0 - params.rows as f64 - 1.0) * edge / 2.0,
            );
            cells.push(FieldCell {
                row,
                column,
                offset,
                turn,
            });
        }
    }
    log::debug!(
        "generated field: {}x{} alternating={}",
        params.rows,
        params.columns,
        params.alternating
    );

    Ok(SpiralField {
        params: *params,
        right,
        left,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(rows: u32, columns: u32, alternating: bool) -> FieldParams {
        FieldParams {
            spiral: SpiralParams::new(4, 0.2, 100.0),
            rows,
            columns,
            alternating,
        }
    }

    #[test]
    fn test_single_cell_is_centered() {
        let field = generate_field(&FieldParams::single(SpiralParams::new(3, 0.3, 80.0))).unwrap();
        assert_eq!(field.cells().len(), 1);
        assert_eq!(field.cells()[0].offset, (0.0, 0.0));
        assert_eq!(field.cells()[0].turn, Turn::Right);
        assert_eq!(field.size(), (80.0, 80.0));
    }

    #[test]
    fn test_offsets_tile_without_gaps() {
        let field = generate_field(&params(2, 3, false)).unwrap();
        let offsets: Vec<_> = field.cells().iter().map(|c| c.offset).collect();
        assert_eq!(
            offsets,
            vec![
                (-100.0, -50.0),
                (0.0, -50.0),
                (100.0, -50.0),
                (-100.0, 50.0),
                (0.0, 50.0),
                (100.0, 50.0),
            ]
        );
        assert_eq!(field.size(), (300.0, 200.0));
    }

    #[test]
    fn test_alternating_checkerboard() {
        let field = generate_field(&params(2, 2, true)).unwrap();
        let turns: Vec<_> = field.cells().iter().map(|c| c.turn).collect();
        assert_eq!(turns, vec![Turn::Left, Turn::Right, Turn::Right, Turn::Left]);

        let field = generate_field(&params(2, 2, false)).unwrap();
        assert!(field.cells().iter().all(|c| c.turn == Turn::Right));
    }

    #[test]
    fn test_left_spiral_uses_mirrored_ratio() {
        let field = generate_field(&params(1, 1, true)).unwrap();
        assert_eq!(field.spiral(Turn::Right).params().offset_ratio, 0.2);
        assert_eq!(field.spiral(Turn::Left).params().offset_ratio, 1.0 - 0.2);
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(matches!(
            generate_field(&params(0, 2, false)),
            Err(SpiralError::InvalidArgument { name: "rows", .. })
        ));
        assert!(matches!(
            generate_field(&params(2, 0, false)),
            Err(SpiralError::InvalidArgument { name: "columns", .. })
        ));
    }

    #[test]
    fn test_paint_places_cells_in_viewport() {
        use crate::display_list::Command;

        let field = generate_field(&params(1, 2, false)).unwrap();
        let viewport = Viewport {
            width: 200.0,
            height: 100.0,
        };
        let mut painter = Painter::begin_frame(viewport);
        field.paint(&mut painter, viewport);
        let list = painter.finish();

        assert_eq!(list.commands.len(), 8);
        let origins: Vec<_> = list
            .commands
            .iter()
            .step_by(4)
            .map(|command| match command {
                Command::StrokeRoundedRect { transform, .. } => transform.apply_point(0.0, 0.0),
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert_eq!(origins, vec![(0.0, 0.0), (100.0, 0.0)]);
    }
}
