//! Tests for `vector` module

use super::vector::*;

#[test]
fn test_vector_new() {
    let v = Vector::new("vec-1", vec![1.0, 2.0, 3.0]);

    assert_eq!(v.id, "vec-1");
    assert_eq!(v.values, vec![1.0, 2.0, 3.0]);
    assert_eq!(v.dimension(), 3);
}

#[test]
fn test_vector_json_shape() {
    // Arrange
    let json = r#"{"id":"a","values":[0.5,-1.0]}"#;

    // Act
    let v: Vector = serde_json::from_str(json).expect("deserialize");

    // Assert
    assert_eq!(v, Vector::new("a", vec![0.5, -1.0]));
    assert_eq!(serde_json::to_string(&v).expect("serialize"), json);
}

#[test]
fn test_empty_vector() {
    let v = Vector::new(String::from("empty"), Vec::new());
    assert_eq!(v.dimension(), 0);
}
