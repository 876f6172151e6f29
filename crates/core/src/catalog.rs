//! Shape catalog - the 18 pentomino shapes and their rotation templates
//!
//! Each shape is defined as string art (one string per template row, `O`
//! filled, `.` empty) and parsed once into boolean grids when the catalog is
//! first accessed. Parsing validates the pentomino rule - exactly five
//! filled cells per template - so malformed shape data fails at startup, not
//! in the middle of a collision check.
//!
//! Template dimensions are not uniform: the horizontal I template is 7x1,
//! the vertical one 3x5. The blank padding columns around each shape are
//! part of the template on purpose; the spawn-column formula assumes them.

use std::sync::LazyLock;

use pentris_types::{ShapeId, CELLS_PER_PIECE};

/// One rotation state of a shape: a fixed-size filled/empty grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl Template {
    fn from_art(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows[0].len() as i32;
        let mut cells = Vec::with_capacity((width * height) as usize);
        for row in rows {
            assert_eq!(
                row.len() as i32,
                width,
                "ragged template rows: {rows:?}"
            );
            for ch in row.chars() {
                cells.push(ch == 'O');
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Template width in cells
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Template height in cells
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the cell at template-local `(x, y)` is filled
    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return false;
        }
        self.cells[(y * self.width + x) as usize]
    }

    /// Iterate the template-local offsets of all filled cells
    pub fn filled_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| (i as i32 % width, i as i32 / width))
    }

    fn filled_count(&self) -> usize {
        self.cells.iter().filter(|filled| **filled).count()
    }
}

/// An immutable shape: identity plus its ordered rotation templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    id: ShapeId,
    templates: Vec<Template>,
}

impl Shape {
    fn new(id: ShapeId, art: &[&[&str]]) -> Self {
        let templates: Vec<Template> = art.iter().map(|rows| Template::from_art(rows)).collect();
        assert!(!templates.is_empty(), "shape {id:?} has no templates");
        for template in &templates {
            assert_eq!(
                template.filled_count(),
                CELLS_PER_PIECE,
                "shape {id:?} template violates the pentomino rule"
            );
        }
        Self { id, templates }
    }

    /// Shape identity
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Number of distinct rotation states
    pub fn rotation_count(&self) -> usize {
        self.templates.len()
    }

    /// Template for the given rotation index
    ///
    /// The index is taken modulo the rotation count, so any value is valid.
    pub fn template(&self, rotation: usize) -> &Template {
        &self.templates[rotation % self.templates.len()]
    }
}

/// The fixed set of shapes a session draws from
#[derive(Debug)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// The standard 18-pentomino catalog, built once per process
    pub fn standard() -> &'static ShapeCatalog {
        static CATALOG: LazyLock<ShapeCatalog> = LazyLock::new(ShapeCatalog::build);
        &CATALOG
    }

    /// All shapes, in `ShapeId::ALL` order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes in the catalog
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the catalog is empty (never true for the standard catalog)
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Look up a shape by identity
    pub fn get(&self, id: ShapeId) -> &Shape {
        &self.shapes[id as usize]
    }

    fn build() -> Self {
        let shapes = vec![
            Shape::new(
                ShapeId::F,
                &[
                    &["..OO.", ".OO..", "..O.."],
                    &["..O..", ".OOO.", "...O."],
                    &["..O..", "..OO.", ".OO.."],
                    &[".O...", ".OOO.", "..O.."],
                ],
            ),
            Shape::new(
                ShapeId::FPrime,
                &[
                    &[".OO..", "..OO.", "..O.."],
                    &["...O.", ".OOO.", "..O.."],
                    &["..O..", ".OO..", "..OO."],
                    &["..O..", ".OOO.", ".O..."],
                ],
            ),
            Shape::new(
                ShapeId::I,
                &[
                    &[".OOOOO."],
                    &[".O.", ".O.", ".O.", ".O.", ".O."],
                ],
            ),
            Shape::new(
                ShapeId::L,
                &[
                    &["....O.", ".OOOO."],
                    &[".O..", ".O..", ".O..", ".OO."],
                    &[".OOOO.", ".O...."],
                    &[".OO.", "..O.", "..O.", "..O."],
                ],
            ),
            Shape::new(
                ShapeId::J,
                &[
                    &[".O....", ".OOOO."],
                    &[".OO.", ".O..", ".O..", ".O.."],
                    &[".OOOO.", "....O."],
                    &["..O.", "..O.", "..O.", ".OO."],
                ],
            ),
            Shape::new(
                ShapeId::N,
                &[
                    &[".OOO..", "...OO."],
                    &["..O.", "..O.", ".OO.", ".O.."],
                    &[".OO...", "..OOO."],
                    &["..O.", ".OO.", ".O..", ".O.."],
                ],
            ),
            Shape::new(
                ShapeId::NPrime,
                &[
                    &["..OOO.", ".OO..."],
                    &[".O..", ".OO.", "..O.", "..O."],
                    &["...OO.", ".OOO.."],
                    &[".O..", ".O..", ".OO.", "..O."],
                ],
            ),
            Shape::new(
                ShapeId::P,
                &[
                    &[".OO.", ".OO.", ".O.."],
                    &[".OOO.", "..OO."],
                    &["..O.", ".OO.", ".OO."],
                    &[".OO..", ".OOO."],
                ],
            ),
            Shape::new(
                ShapeId::Q,
                &[
                    &[".OO.", ".OO.", "..O."],
                    &["..OO.", ".OOO."],
                    &[".O..", ".OO.", ".OO."],
                    &[".OOO.", ".OO.."],
                ],
            ),
            Shape::new(
                ShapeId::T,
                &[
                    &["..O..", "..O..", ".OOO."],
                    &[".O...", ".OOO.", ".O..."],
                    &[".OOO.", "..O..", "..O.."],
                    &["...O.", ".OOO.", "...O."],
                ],
            ),
            Shape::new(
                ShapeId::U,
                &[
                    &[".O.O.", ".OOO."],
                    &[".OO.", ".O..", ".OO."],
                    &[".OOO.", ".O.O."],
                    &[".OO.", "..O.", ".OO."],
                ],
            ),
            Shape::new(
                ShapeId::V,
                &[
                    &[".O...", ".O...", ".OOO."],
                    &[".OOO.", ".O...", ".O..."],
                    &[".OOO.", "...O.", "...O."],
                    &["...O.", "...O.", ".OOO."],
                ],
            ),
            Shape::new(
                ShapeId::W,
                &[
                    &[".O...", ".OO..", "..OO."],
                    &["..OO.", ".OO..", ".O..."],
                    &[".OO..", "..OO.", "...O."],
                    &["...O.", "..OO.", ".OO.."],
                ],
            ),
            Shape::new(ShapeId::X, &[&["..O..", ".OOO.", "..O.."]]),
            Shape::new(
                ShapeId::Y,
                &[
                    &["...O..", ".OOOO."],
                    &[".O..", ".O..", ".OO.", ".O.."],
                    &[".OOOO.", "..O..."],
                    &["..O.", ".OO.", "..O.", "..O."],
                ],
            ),
            Shape::new(
                ShapeId::YPrime,
                &[
                    &["..O...", ".OOOO."],
                    &[".O..", ".OO.", ".O..", ".O.."],
                    &[".OOOO.", "...O.."],
                    &["..O.", "..O.", ".OO.", "..O."],
                ],
            ),
            Shape::new(
                ShapeId::Z,
                &[
                    &[".OO..", "..O..", "..OO."],
                    &["...O.", ".OOO.", ".O..."],
                ],
            ),
            Shape::new(
                ShapeId::S,
                &[
                    &["..OO.", "..O..", ".OO.."],
                    &[".O...", ".OOO.", "...O."],
                ],
            ),
        ];
        Self { shapes }
    }
}
