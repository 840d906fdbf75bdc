use formcheck_base::{Rect, Vec2};

#[test]
fn test_rect_max_and_area() {
    let rect = Rect::new(Vec2::new(10.0f32, 20.0), Vec2::new(30.0, 40.0));
    assert_eq!(rect.max(), Vec2::new(40.0, 60.0));
    assert_eq!(rect.area(), 1200.0);
}

#[test]
fn test_rect_intersection_overlap() {
    let a = Rect::new(Vec2::new(0.0f32, 0.0), Vec2::new(10.0, 10.0));
    let b = Rect::new(Vec2::new(5.0f32, 5.0), Vec2::new(10.0, 10.0));
    let overlap = a.intersection(b).unwrap();
    assert_eq!(overlap.origin, Vec2::new(5.0, 5.0));
    assert_eq!(overlap.size, Vec2::new(5.0, 5.0));
}

#[test]
fn test_rect_intersection_contained() {
    let outer = Rect::new(Vec2::new(0.0f32, 0.0), Vec2::new(100.0, 100.0));
    let inner = Rect::new(Vec2::new(10.0f32, 20.0), Vec2::new(5.0, 5.0));
    assert_eq!(outer.intersection(inner), Some(inner));
}

#[test]
fn test_rect_intersection_touching_edges_is_none() {
    let a = Rect::new(Vec2::new(0.0f32, 0.0), Vec2::new(10.0, 10.0));
    let b = Rect::new(Vec2::new(10.0f32, 0.0), Vec2::new(10.0, 10.0));
    assert_eq!(a.intersection(b), None);
}

#[test]
fn test_rect_intersection_disjoint() {
    let a = Rect::new(Vec2::new(0i32, 0), Vec2::new(4, 4));
    let b = Rect::new(Vec2::new(8i32, 8), Vec2::new(4, 4));
    assert_eq!(a.intersection(b), None);
}

#[test]
fn test_vec2_arithmetic() {
    let a = Vec2::new(3.0f32, 4.0);
    let b = Vec2::new(1.0f32, 1.0);
    assert_eq!(a - b, Vec2::new(2.0, 3.0));
    assert_eq!(a + b, Vec2::new(4.0, 5.0));
    assert_eq!(a / 2.0, Vec2::new(1.5, 2.0));
}

#[test]
fn test_vec2_is_finite() {
    assert!(Vec2::new(1.0f32, -2.0).is_finite());
    assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
    assert!(!Vec2::new(0.0, f32::INFINITY).is_finite());
}

#[test]
fn test_vec2_heading() {
    let right = Vec2::new(1.0f64, 0.0);
    let down = Vec2::new(0.0f64, 1.0);
    assert_eq!(right.heading(), 0.0);
    assert!((down.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}
