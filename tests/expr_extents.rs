use rayon::prelude::*;
use tensor_extents::expr::{BinaryOp, Expr, UnaryOp};
use tensor_extents::tensor::{Matrix, Tensor, TensorError, Vector};
use tensor_extents::Extents;

// Folds a projected (all-scalar) tree into its value.
fn eval_scalar(e: &Expr<'_, f64>) -> f64 {
    match e {
        Expr::Terminal(_) => e.as_scalar().unwrap(),
        Expr::Unary { op, operand } => match op {
            UnaryOp::Negate => -eval_scalar(operand),
            UnaryOp::UnaryPlus => eval_scalar(operand),
        },
        Expr::Binary { op, lhs, rhs } => {
            let (a, b) = (eval_scalar(lhs), eval_scalar(rhs));
            let truth = |c: bool| if c { 1.0 } else { 0.0 };
            match op {
                BinaryOp::Plus => a + b,
                BinaryOp::Minus => a - b,
                BinaryOp::Multiplies => a * b,
                BinaryOp::Divides => a / b,
                BinaryOp::EqualTo => truth(a == b),
                BinaryOp::NotEqualTo => truth(a != b),
                BinaryOp::Less => truth(a < b),
                BinaryOp::LessEqual => truth(a <= b),
                BinaryOp::Greater => truth(a > b),
                BinaryOp::GreaterEqual => truth(a >= b),
            }
        }
    }
}

fn evaluate(e: &Expr<'_, f64>) -> Vec<f64> {
    let n = e.extents().unwrap().product();
    (0..n).map(|i| eval_scalar(&e.at_index(i))).collect()
}

#[test]
fn test_elementwise_evaluation_through_projection() {
    let a = Tensor::<f64>::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], [2, 3]).unwrap();
    let b = Tensor::<f64>::new(vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0], [2, 3]).unwrap();

    // a + 2 * b
    let e = Expr::tensor(&a) + Expr::scalar(2.0) * Expr::tensor(&b);
    assert_eq!(e.extents().unwrap(), Extents::from([2, 3]));
    assert_eq!(evaluate(&e), vec![13.0, 12.0, 11.0, 10.0, 9.0, 8.0]);

    // a < b as a 0/1 mask
    let mask = Expr::tensor(&a).less(Expr::tensor(&b));
    assert!(mask.has_logical_operator());
    assert_eq!(evaluate(&mask), vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_mixed_terminals() {
    let m = Matrix::new(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let v = Vector::from(vec![10.0, 20.0, 30.0]);

    // A vector is a column, so it lines up with a 3x1 matrix.
    let e = -(Expr::matrix(&m) - Expr::vector(&v));
    assert_eq!(e.extents().unwrap(), Extents::from([3, 1]));
    assert_eq!(evaluate(&e), vec![9.0, 18.0, 27.0]);
}

#[test]
fn test_pure_scalar_expression() {
    let e = (Expr::<f64>::scalar(3.0) + Expr::scalar(4.0)).greater_equal(Expr::scalar(7.0));
    assert!(e.extents().unwrap().is_free_scalar());
    assert!(e.has_logical_operator());
    assert_eq!(evaluate(&e), vec![1.0]);
}

#[test]
fn test_mismatch_reports_innermost_failing_node() {
    let a = Tensor::<f64>::zeros([2, 3]);
    let b = Tensor::<f64>::zeros([3, 2]);
    let c = Tensor::<f64>::zeros([4]);

    let e = (Expr::tensor(&a) * Expr::tensor(&b)) + Expr::tensor(&c);
    match e.extents() {
        Err(TensorError::ShapeMismatch { op, lhs, rhs }) => {
            assert_eq!(op, BinaryOp::Multiplies);
            assert_eq!(lhs, Extents::from([2, 3]));
            assert_eq!(rhs, Extents::from([3, 2]));
        }
        other => panic!("expected a shape mismatch, got {other:?}"),
    }
}

#[test]
fn test_projection_is_shareable_across_threads() {
    let data: Vec<f64> = (0..1024).map(|i| i as f64).collect();
    let a = Tensor::<f64>::new(data, [32, 32]).unwrap();
    let e = Expr::tensor(&a) * Expr::scalar(0.5) + Expr::scalar(1.0);

    let n = e.extents().unwrap().product();
    let parallel: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|i| eval_scalar(&e.at_index(i)))
        .collect();
    assert_eq!(parallel, evaluate(&e));
    assert_eq!(parallel[10], 6.0);
}

#[test]
fn test_single_element_tensor_broadcast_evaluates() {
    let one = Tensor::<f64>::ones([1]);
    let t = Tensor::<f64>::new((0..25).map(f64::from).collect(), [5, 5]).unwrap();

    let e = Expr::tensor(&one) - Expr::tensor(&t);
    assert_eq!(e.extents().unwrap(), Extents::from([5, 5]));
    let expected: Vec<f64> = (0..25).map(|i| 1.0 - f64::from(i)).collect();
    assert_eq!(evaluate(&e), expected);
}
