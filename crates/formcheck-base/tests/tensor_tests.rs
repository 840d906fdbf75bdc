use formcheck_base::{Tensor, TensorError};

#[test]
fn test_tensor_new_valid_shape() {
    let tensor = Tensor::new(vec![2, 3, 3], vec![0u8; 18]).unwrap();
    assert_eq!(tensor.shape, vec![2, 3, 3]);
    assert_eq!(tensor.len(), 18);
    assert!(!tensor.is_empty());
}

#[test]
fn test_tensor_new_shape_mismatch() {
    let result = Tensor::new(vec![2, 2], vec![1.0f32; 3]);
    assert_eq!(
        result,
        Err(TensorError::ShapeMismatch {
            expected: 4,
            got: 3
        })
    );
}

#[test]
fn test_tensor_new_shape_overflow() {
    let result = Tensor::<u8>::new(vec![usize::MAX, 2], vec![]);
    assert_eq!(result, Err(TensorError::ShapeOverflow));
}

#[test]
fn test_tensor_error_display() {
    let err = TensorError::ShapeMismatch {
        expected: 12,
        got: 10,
    };
    assert_eq!(err.to_string(), "shape mismatch: expected 12 elements, got 10");
}
