//! Shape catalog tests

use tetris_drop::core::{coordinates_of, shape_height, shape_lookup, SimulationError};
use tetris_drop::types::Shape;

// ============== Catalog Tests ==============

#[test]
fn test_catalog_rows() {
    let expected: [(Shape, &[&[u8]]); 7] = [
        (Shape::Q, &[&[0, 1], &[0, 1]]),
        (Shape::I, &[&[0, 1, 2, 3]]),
        (Shape::Z, &[&[0, 1], &[1, 2]]),
        (Shape::S, &[&[1, 2], &[0, 1]]),
        (Shape::T, &[&[0, 1, 2], &[1]]),
        (Shape::L, &[&[0], &[0], &[0, 1]]),
        (Shape::J, &[&[1], &[1], &[0, 1]]),
    ];

    for (shape, rows) in expected {
        assert_eq!(coordinates_of(shape), rows, "rows for {shape}");
    }
}

#[test]
fn test_catalog_is_stable_across_calls() {
    for shape in Shape::ALL {
        let first = coordinates_of(shape);
        for _ in 0..3 {
            assert_eq!(coordinates_of(shape), first);
        }
    }
}

#[test]
fn test_no_shape_is_taller_than_three_rows() {
    // The drop algorithm's single-step correction depends on this.
    assert!(Shape::ALL.iter().all(|&s| shape_height(s) <= 3));
}

// ============== Lookup Tests ==============

#[test]
fn test_lookup_every_code() {
    for (code, shape) in [
        ('Q', Shape::Q),
        ('I', Shape::I),
        ('Z', Shape::Z),
        ('S', Shape::S),
        ('T', Shape::T),
        ('L', Shape::L),
        ('J', Shape::J),
    ] {
        assert_eq!(shape_lookup(code), Ok(shape));
    }
}

#[test]
fn test_lookup_unknown_code() {
    assert_eq!(
        shape_lookup('O'),
        Err(SimulationError::UnknownShape { letter: 'O' })
    );
    assert!(shape_lookup('q').is_err());
}
