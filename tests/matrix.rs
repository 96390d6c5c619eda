use approx::assert_relative_eq;
use interval_bounds::*;
use rand::{rngs::StdRng, SeedableRng};

fn iv(lower: f64, upper: f64) -> Interval {
    Interval::new(lower, upper)
}

// 2x3 matrix [[1, 3, 5], [2, 4, 6]]
fn two_by_three() -> Matrix<f64> {
    Matrix::from_rows(&[[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]).unwrap()
}

#[test]
fn construction() {
    let m = two_by_three();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m.size(), 6);
    assert_eq!(m.shape(), Shape::new(2, 3));
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(m[(1, 2)], 6.0);
    assert_eq!(m[3], 4.0);
    assert_eq!(m.get(0, 1), Some(&3.0));
    assert_eq!(m.get(2, 0), None);

    let m2 = Matrix::from_col_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m, m2);
    assert_eq!(
        Matrix::from_col_major(2, 2, vec![1.0, 2.0, 3.0]),
        Err(Error::DataLength { expected: 4, found: 3 })
    );
    assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());

    let m3 = Matrix::from_fn(2, 3, |row, col| (1 + row + 2 * col) as f64);
    assert_eq!(m, m3);

    let column = Matrix::column(vec![1.0, 2.0, 3.0]);
    assert_eq!(column.shape(), Shape::new(3, 1));
    let row = Matrix::row_vector(vec![1.0, 2.0, 3.0]);
    assert_eq!(row.shape(), Shape::new(1, 3));
    assert_eq!(column.transpose(), row);
    assert_eq!(m.transpose()[(2, 1)], 6.0);

    assert_eq!(Matrix::from_element(2, 2, iv(1.0, 2.0)).as_slice(), &[iv(1.0, 2.0); 4]);
    assert!(Matrix::<Interval>::identity(3).is_identity(Zero::new(0.0)));
    assert!(Matrix::<f64>::zeros(2, 3).is_zero(Zero::new(0.0)));
    assert!(Matrix::<Interval>::ones(3, 2).is_ones(Zero::new(0.0)));
}

#[test]
fn indexing_and_mutation() {
    let mut m = Matrix::<f64>::zeros(2, 2);
    m[(0, 1)] = 3.0;
    m[2] += 1.0;
    *m.get_mut(1, 0).unwrap() = 5.0;
    assert_eq!(m.as_slice(), &[0.0, 5.0, 4.0, 0.0]);
    assert!(m.get_mut(2, 2).is_none());
    m.iter_mut().for_each(|x| *x *= 2.0);
    assert_eq!(m.iter().sum::<f64>(), 18.0);
    assert_eq!(m.into_vec(), vec![0.0, 10.0, 8.0, 0.0]);
}

#[test]
#[should_panic]
fn index_out_of_range() {
    let m = two_by_three();
    let _ = m[(2, 0)];
}

#[test]
fn map_and_fold() {
    let m = two_by_three();
    let squared = m.map(|x| x * x);
    assert_eq!(squared.as_slice(), &[1.0, 4.0, 9.0, 16.0, 25.0, 36.0]);
    assert_eq!(m.map(|x| x > 3.0).as_slice(), &[false, false, false, true, true, true]);

    // sum of products
    let other: Matrix<f64> = Matrix::from_element(2, 3, 2.0);
    assert_eq!(m.fold(0.0, |acc, x| acc + x), 21.0);
    assert_eq!(m.binary_fold(&other, 0.0, |acc, x, y| acc + x * y), Ok(42.0));
    assert_eq!(m.reduce(f64::max), Some(6.0));
    assert_eq!(Matrix::<f64>::zeros(0, 0).reduce(f64::max), None);

    // coefficient order is column-major
    let order = m.fold(Vec::new(), |mut acc, x| {
        acc.push(x);
        acc
    });
    assert_eq!(order, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let sum = m.binary_map(&other, |x, y| x + y).unwrap();
    assert_eq!(sum.as_slice(), &[3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);

    // counts positions at which the first operand is larger
    let count = m.binary_fold(&other, 0, |acc, x, y| acc + (x > y) as usize);
    assert_eq!(count, Ok(4));

    // map over each row of a 2x3 matrix into its sum
    let row_sums = Matrix::column((0..m.rows()).map(|row| m.row(row).sum()).collect());
    assert_eq!(row_sums.as_slice(), &[9.0, 12.0]);
}

#[test]
fn shape_mismatch() {
    let a = Matrix::<f64>::zeros(3, 1);
    let b = Matrix::<f64>::zeros(2, 1);
    let expected = Error::ShapeMismatch {
        expected: Shape::new(3, 1),
        found: Shape::new(2, 1),
    };

    assert_eq!(a.binary_map(&b, |x, y| x + y).unwrap_err(), expected);
    assert_eq!(a.binary_fold(&b, 0.0, |acc, x, y| acc + x * y), Err(expected.clone()));
    assert_eq!(a.binary_any(&b, |x, y| x == y), Err(expected.clone()));
    assert_eq!(a.binary_all(&b, |x, y| x == y), Err(expected.clone()));
    assert_eq!(a.checked_add(&b).unwrap_err(), expected);
    assert_eq!(a.cwise_product(&b).unwrap_err(), expected);
    assert_ne!(a, b);
    assert_eq!(expected.to_string(), "shape mismatch: expected 3x1, found 2x1");
}

#[test]
fn predicates() {
    let m = two_by_three();
    assert!(m.any(|x| x > 5.0));
    assert!(!m.any(|x| x > 6.0));
    assert!(m.all(|x| x > 0.0));
    assert!(!m.all(|x| x > 1.0));
    assert_eq!(m.binary_any(&m, |x, y| x != y), Ok(false));
    assert_eq!(m.binary_all(&m, |x, y| x == y), Ok(true));

    let zero = Zero::default();
    assert!(Matrix::<f64>::from_element(2, 2, 3.0).is_constant(3.0, zero));
    assert!(Matrix::<f64>::from_element(2, 2, 3.0 + 1e-13).is_constant(3.0, zero));
    assert!(!m.is_constant(1.0, zero));
    assert!(Matrix::from_element(2, 2, iv(-1e-13, 1e-13)).is_zero(zero));
    assert!(!Matrix::from_element(2, 2, iv(-1.0, 1.0)).is_zero(zero));

    let mut identity = Matrix::<f64>::identity(3);
    assert!(identity.is_identity(zero));
    identity[(0, 1)] = 1e-3;
    assert!(!identity.is_identity(zero));
    assert!(identity.is_identity(Zero::new(1e-2)));
}

#[test]
fn cwise() {
    let m = Matrix::from_rows(&[[iv(1.0, 2.0), iv(-3.0, 2.0)]]).unwrap();
    assert_eq!(m.cwise_lower().as_slice(), &[1.0, -3.0]);
    assert_eq!(m.cwise_upper().as_slice(), &[2.0, 2.0]);
    assert_eq!(m.cwise_median().as_slice(), &[1.5, -0.5]);
    assert_eq!(m.cwise_width().as_slice(), &[1.0, 5.0]);
    assert_eq!(m.cwise_squared().as_slice(), &[iv(1.0, 4.0), iv(0.0, 9.0)]);

    let values: Matrix<f64> = Matrix::from_rows(&[[2.0, -3.0]]).unwrap();
    assert_eq!(values.cwise_squared().as_slice(), &[4.0, 9.0]);
    assert_eq!(values.cwise_width().as_slice(), &[0.0, 0.0]);
    assert_eq!(values.bounds().as_slice(), &[Interval::from(2.0), Interval::from(-3.0)]);

    // mixed element kinds
    let product = m.cwise_product(&values).unwrap();
    assert_eq!(product.as_slice(), &[iv(2.0, 4.0), iv(-6.0, 9.0)]);
    let product = values.cwise_product(&m).unwrap();
    assert_eq!(product.as_slice(), &[iv(2.0, 4.0), iv(-6.0, 9.0)]);

    let quotient = m.cwise_quotient(&values).unwrap();
    assert_eq!(quotient[0], iv(0.5, 1.0));
    assert!(quotient[1].contains_interval(iv(-2.0 / 3.0, 1.0), Zero::new(0.0)));
    let quotient = values.cwise_quotient(&m).unwrap();
    assert_eq!(quotient[0], iv(1.0, 2.0));
    assert_eq!(quotient[1], Interval::whole());

    let plain = values.cwise_quotient(&values).unwrap();
    assert_eq!(plain.as_slice(), &[1.0, 1.0]);
}

#[test]
fn cwise_hull_intersection() {
    let intervals = Matrix::from_rows(&[[iv(1.0, 2.0), iv(3.0, 4.0)]]).unwrap();
    let values: Matrix<f64> = Matrix::from_rows(&[[1.5, 5.0]]).unwrap();

    let hull = intervals.cwise_hull(&values).unwrap();
    assert_eq!(hull.as_slice(), &[iv(1.0, 2.0), iv(3.0, 5.0)]);
    let hull = values.cwise_hull(&intervals).unwrap();
    assert_eq!(hull.as_slice(), &[iv(1.0, 2.0), iv(3.0, 5.0)]);
    let hull = values.cwise_hull(&Matrix::<f64>::from_rows(&[[0.5, 6.0]]).unwrap()).unwrap();
    assert_eq!(hull.as_slice(), &[iv(0.5, 1.5), iv(5.0, 6.0)]);
    let hull = intervals.cwise_hull(&intervals).unwrap();
    assert_eq!(hull, intervals);

    let meet = intervals.cwise_intersection(&values).unwrap();
    assert_eq!(meet[0], 1.5);
    assert!(meet[1].is_empty());
    let meet = values.cwise_intersection(&intervals).unwrap();
    assert_eq!(meet[0], 1.5);
    let meet = intervals
        .cwise_intersection(&Matrix::from_rows(&[[iv(0.0, 1.5), iv(5.0, 6.0)]]).unwrap())
        .unwrap();
    assert_eq!(meet[0], iv(1.0, 1.5));
    assert!(meet[1].is_empty());
    let meet = values.cwise_intersection(&values).unwrap();
    assert_eq!(meet.as_slice(), &[Interval::from(1.5), Interval::from(5.0)]);
}

#[test]
fn reductions() {
    let m = two_by_three();
    assert_eq!(m.sum(), 21.0);
    assert_eq!(m.product(), 720.0);
    assert_eq!(Matrix::<f64>::zeros(0, 3).sum(), 0.0);
    assert_eq!(Matrix::<f64>::zeros(0, 3).product(), 1.0);

    let intervals = Matrix::from_rows(&[[iv(1.0, 2.0), iv(3.0, 4.0)]]).unwrap();
    assert_eq!(intervals.sum(), iv(4.0, 6.0));
    assert_eq!(intervals.product(), iv(3.0, 8.0));
}

#[test]
fn arithmetic() {
    let a: Matrix<f64> = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let b: Matrix<f64> = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    let product = a.matrix_product(&b).unwrap();
    assert_eq!(product, Matrix::from_rows(&[[22.0, 28.0], [49.0, 64.0]]).unwrap());
    assert!(a.matrix_product(&a).is_err());

    // interval times plain
    let product = a.bounds().matrix_product(&b).unwrap();
    assert_eq!(product[(1, 1)], 64.0);

    let sum = a.checked_add(&a).unwrap();
    assert_eq!(sum, a.clone() * 2.0);
    let difference = a.checked_sub(&a).unwrap();
    assert!(difference.is_zero(Zero::new(0.0)));
    assert_eq!(-&a, a.clone() * -1.0);
    assert_eq!(a.clone() / 2.0, a.map(|x| x * 0.5));

    let mut m = a.bounds();
    m *= iv(1.0, 2.0);
    assert_eq!(m[(1, 2)], iv(6.0, 12.0));
    m /= 2.0;
    assert_eq!(m[(1, 2)], iv(3.0, 6.0));
    assert_eq!((-m)[(1, 2)], iv(-6.0, -3.0));
}

#[test]
fn determinant() {
    let m: Matrix<f64> = Matrix::from_rows(&[[2.0]]).unwrap();
    assert_eq!(m.determinant(), Ok(2.0));

    let m: Matrix<f64> = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(m.determinant(), Ok(-2.0));

    let m: Matrix<f64> =
        Matrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]).unwrap();
    assert_eq!(m.determinant(), Ok(6.0));

    let zero = Interval::from(0.0);
    let m = Matrix::from_rows(&[[iv(1.0, 2.0), zero], [zero, iv(3.0, 4.0)]]).unwrap();
    assert_eq!(m.determinant(), Ok(iv(3.0, 8.0)));

    assert_eq!(
        Matrix::<f64>::zeros(2, 3).determinant(),
        Err(Error::NotSquare(Shape::new(2, 3)))
    );
    assert_eq!(
        Matrix::<f64>::zeros(4, 4).determinant(),
        Err(Error::UnsupportedSize(Shape::new(4, 4)))
    );
}

#[test]
fn inverse() {
    let m: Matrix<f64> = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
    let inverse = m.inverse().unwrap();
    let product = m.matrix_product(&inverse).unwrap();
    assert!(product.is_identity(Zero::default()), "m * m^-1 is not the identity:\n{}", product);
    assert_relative_eq!(inverse[(0, 0)], 0.6, epsilon = 1e-12);
    assert_relative_eq!(inverse[(0, 1)], -0.7, epsilon = 1e-12);

    let m: Matrix<f64> =
        Matrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]).unwrap();
    let product = m.matrix_product(&m.inverse().unwrap()).unwrap();
    assert!(product.is_identity(Zero::default()), "m * m^-1 is not the identity:\n{}", product);

    // the product of an interval matrix and its inverse encloses the identity
    let mut rng = StdRng::seed_from_u64(7);
    for size in 1..=3 {
        for _ in 0..20 {
            let m = Matrix::<Interval>::random(size, size, &mut rng);
            let product = m.matrix_product(&m.inverse().unwrap()).unwrap();
            let identity = Matrix::<Interval>::identity(size);
            let enclosed = product
                .binary_all(&identity, |x, y| x.contains_interval(y, Zero::new(0.0)))
                .unwrap();
            assert!(enclosed, "m * m^-1 does not enclose the identity:\n{}\n{}", m, product);
        }
    }

    assert!(Matrix::<f64>::zeros(2, 1).inverse().is_err());
}

#[test]
fn views() {
    let m: Matrix<f64> = Matrix::from_fn(3, 4, |row, col| (10 * row + col) as f64);

    let block = m.block(1, 1, 2, 2);
    assert_eq!(block.shape(), Shape::new(2, 2));
    assert_eq!(block[(0, 0)], 11.0);
    assert_eq!(block[(1, 1)], 22.0);
    assert_eq!(block.get(1, 0), Some(&21.0));
    assert_eq!(block.get(2, 0), None);
    assert_eq!(block.to_matrix(), Matrix::from_rows(&[[11.0, 12.0], [21.0, 22.0]]).unwrap());
    assert_eq!(block.sum(), 66.0);

    let row = m.row(2);
    assert_eq!(row.shape(), Shape::new(1, 4));
    assert_eq!(row, Matrix::row_vector(vec![20.0, 21.0, 22.0, 23.0]));

    let col = m.col(3);
    assert_eq!(col.shape(), Shape::new(3, 1));
    assert_eq!(col, Matrix::column(vec![3.0, 13.0, 23.0]));

    // nested views
    assert_eq!(block.col(1)[(1, 0)], 22.0);
    assert_eq!(block.row(0).block(0, 1, 1, 1)[(0, 0)], 12.0);
    assert_eq!(m.block(0, 0, 0, 4).size(), 0);

    // views take part in binary operations
    let sum = block.checked_add(&Matrix::<f64>::from_element(2, 2, 1.0)).unwrap();
    assert_eq!(sum[(1, 1)], 23.0);
    let dot = m.row(0).binary_fold(&m.row(1), 0.0, |acc, x, y| acc + x * y).unwrap();
    assert_eq!(dot, 0.0 * 10.0 + 1.0 * 11.0 + 2.0 * 12.0 + 3.0 * 13.0);
    assert!(m.row(0).binary_map(&m.col(0), |x, y| x + y).is_err());
}

#[test]
fn fills() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut m = Matrix::<Interval>::zeros(2, 3);

    m.set_constant(iv(1.0, 2.0));
    assert!(m.all(|x| x == iv(1.0, 2.0)));
    m.set_ones();
    assert!(m.is_ones(Zero::new(0.0)));
    m.set_zero();
    assert!(m.is_zero(Zero::new(0.0)));
    m.set_identity();
    assert_eq!(m.shape(), Shape::new(2, 3));
    assert!(m.is_identity(Zero::new(0.0)));
    m.set_random(&mut rng);
    assert!(m.all(|x| x.lower() >= 0.0 && x.upper() < 1.0 && x.lower() <= x.upper()));

    let values = Matrix::<f64>::random(4, 4, &mut rng);
    assert!(values.all(|x| (0.0..1.0).contains(&x)));
}

#[test]
fn display() {
    let m = two_by_three();
    assert_eq!(m.to_string(), "[1, 3, 5]\n[2, 4, 6]");
    assert_eq!(m.col(0).to_string(), "[1]\n[2]");

    let m = Matrix::row_vector(vec![iv(1.0, 2.0), Interval::from(3.0), Interval::empty()]);
    assert_eq!(m.to_string(), "[[1,2], [3], []]");
}
