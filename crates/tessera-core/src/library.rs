use crate::color::ShapeColor;
use crate::shape::Shape;

/// The seven classic tetrominoes, in I O T S Z J L order.
pub fn standard_tetrominoes() -> Vec<Shape> {
    vec![
        Shape::from_coords("I", &[(0, 0), (0, 1), (0, 2), (0, 3)], ShapeColor::Cyan),
        Shape::from_coords("O", &[(0, 0), (0, 1), (1, 0), (1, 1)], ShapeColor::Yellow),
        Shape::from_coords("T", &[(0, 0), (0, 1), (0, 2), (1, 1)], ShapeColor::Purple),
        Shape::from_coords("S", &[(0, 1), (0, 2), (1, 0), (1, 1)], ShapeColor::Green),
        Shape::from_coords("Z", &[(0, 0), (0, 1), (1, 1), (1, 2)], ShapeColor::Red),
        Shape::from_coords("J", &[(0, 0), (1, 0), (1, 1), (1, 2)], ShapeColor::Blue),
        Shape::from_coords("L", &[(0, 2), (1, 0), (1, 1), (1, 2)], ShapeColor::Orange),
    ]
}
