use nn_core::engine::{
    clip_matrix, create_matrix, hadamard_product, map_elementwise, release_matrix, softmax_batch,
    softmax_vector,
};
use nn_core::{column_vector, row_vector};
use nn_core::{Axis, Matrix, MatrixError, RowsMatrixBuilder, Shape};
use report::TestReport;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn creation_checks() -> TestReport {
    let mut report = TestReport::new();

    for (num_rows, num_columns) in [(1, 1), (1, 7), (7, 1), (5, 9)] {
        let name = format!("create {}x{}", num_rows, num_columns);
        if let Some(m) = report.check_result(&name, create_matrix(num_rows, num_columns)) {
            report.check(&name, m.as_slice().iter().all(|&x| x == 0.0), || {
                format!("{} is not zero-filled", m.shape())
            });
            release_matrix(Some(m));
        }
    }

    for (num_rows, num_columns) in [(0, 1), (1, 0), (0, 0)] {
        let res = create_matrix(num_rows, num_columns);
        report.check(
            "zero dimensions are rejected",
            res == Err(MatrixError::InvalidDimensions {
                rows: num_rows,
                columns: num_columns,
            }),
            || format!("{}x{} gave {:?}", num_rows, num_columns, res),
        );
    }

    release_matrix(None);
    report.record_pass();

    report
}

fn operator_checks() -> TestReport {
    let mut report = TestReport::new();

    let a = RowsMatrixBuilder::new()
        .with_row(&[1.0, -2.0])
        .with_row(&[3.0, 4.0])
        .build();
    let a = match report.check_result("build a", a) {
        Some(a) => a,
        None => return report,
    };

    if let Some(squared) = report.check_result(
        "hadamard with itself",
        hadamard_product(Some(&a), Some(&a)),
    ) {
        report.check(
            "hadamard squares",
            squared.as_slice() == [1.0, 4.0, 9.0, 16.0],
            || format!("{:?}", squared.as_slice()),
        );
    }

    let wide = Matrix::new(2, 3).ok();
    let res = hadamard_product(Some(&a), wide.as_ref());
    report.check(
        "hadamard shape mismatch",
        res == Err(MatrixError::ShapeMismatch {
            left: Shape::new(2, 2),
            right: Shape::new(2, 3),
        }),
        || format!("{:?}", res),
    );

    let relu = |x: f64| if x < 0.0 { 0.0 } else { x };
    if let Some(activated) = report.check_result("map relu", map_elementwise(Some(&a), &relu)) {
        report.check(
            "relu zeroes negatives",
            activated.as_slice() == [1.0, 0.0, 3.0, 4.0],
            || format!("{:?}", activated.as_slice()),
        );
        report.check("input untouched", a.get(0, 1) == -2.0, || {
            format!("a[0][1] is now {}", a.get(0, 1))
        });
    }

    if let Some(clipped) = report.check_result("clip", clip_matrix(Some(&a), -1.0, 2.0)) {
        report.check(
            "clip bounds",
            clipped.as_slice() == [1.0, -1.0, 2.0, 2.0],
            || format!("{:?}", clipped.as_slice()),
        );
    }

    report
}

fn softmax_checks() -> TestReport {
    let mut report = TestReport::new();

    let v = row_vector![2.0, 1.0, 0.1];
    if let Some(v) = report.check_result("row vector", v) {
        if let Some(p) = report.check_result("softmax row", softmax_vector(Some(&v))) {
            let sum: f64 = p.as_slice().iter().sum();
            report.check("softmax sums to one", (sum - 1.0).abs() < 1e-9, || {
                format!("sum was {}", sum)
            });
            report.check(
                "softmax keeps the order",
                p.get(0, 0) > p.get(0, 1) && p.get(0, 1) > p.get(0, 2),
                || format!("{:?}", p.as_slice()),
            );
        }
    }

    let single = column_vector![5.0];
    if let Some(single) = report.check_result("single element", single) {
        let res = softmax_vector(Some(&single)).map(Matrix::into_vec);
        report.check("1x1 is a vector", res == Ok(vec![1.0]), || {
            format!("{:?}", res)
        });
    }

    let square = Matrix::new(2, 2).ok();
    let res = softmax_vector(square.as_ref());
    report.check(
        "square is not a vector",
        res == Err(MatrixError::NotAVector {
            shape: Shape::new(2, 2),
        }),
        || format!("{:?}", res),
    );

    if let Some(square) = square {
        for axis in [Axis::Row, Axis::Column] {
            let res = softmax_batch(Some(&square), axis).map(Matrix::into_vec);
            report.check("uniform batch", res == Ok(vec![0.5; 4]), || {
                format!("{:?} gave {:?}", axis, res)
            });
        }
    }

    report
}

#[test]
fn library_surface_contract() {
    init_logging();

    let mut report = creation_checks();
    report.merge(operator_checks());
    report.merge(softmax_checks());

    assert!(report.total() > 20, "too few checks ran: {}", report);
    assert!(report.all_passed(), "{}", report);
}
