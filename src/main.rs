//! Side-by-side comparison of Monte Carlo estimates against the exact
//! closed-form results for each supported operation.

use estimar::monte_carlo;
use estimar::primitives::{Matrix, Vector};
use estimar::sampler::UniformSampler;

fn print_matrix(label: &str, m: &Matrix<f64>) {
    println!("{label}:");
    for i in 0..m.n_rows() {
        println!("  {:?}", m.row(i).as_slice());
    }
}

fn main() -> estimar::Result<()> {
    let mut sampler = UniformSampler::from_entropy();

    let x = 2.0;
    println!("--- COSINE ---");
    println!("Monte Carlo:   cos({x}) = {}", monte_carlo::cos(x, &mut sampler)?);
    println!("Deterministic: cos({x}) = {}", x.cos());

    let x = 4.0;
    println!("\n--- SQUARE ROOT ---");
    println!("Monte Carlo:   sqrt({x}) = {}", monte_carlo::sqrt(x, &mut sampler)?);
    println!("Deterministic: sqrt({x}) = {}", x.sqrt());

    let v1 = Vector::from_slice(&[0.1, 0.4, 0.9]);
    let v2 = Vector::from_slice(&[0.4, 0.1, 0.5]);
    println!("\n--- DOT PRODUCT ---");
    println!(
        "Monte Carlo:   {:?} . {:?} = {}",
        v1.as_slice(),
        v2.as_slice(),
        monte_carlo::dot(&v1, &v2, &mut sampler)?
    );
    println!(
        "Deterministic: {:?} . {:?} = {}",
        v1.as_slice(),
        v2.as_slice(),
        v1.dot(&v2)
    );

    println!("\n--- MATRIX MUL ---");
    let m1 = Matrix::from_vec(
        3,
        4,
        vec![
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0,
        ],
    )?;
    let m2 = Matrix::from_vec(
        4,
        3,
        vec![
            3.4, 9.3, 4.4, //
            7.4, 3.3, 0.4, //
            3.9, 1.1, 4.0, //
            6.6, 3.1, 9.9,
        ],
    )?;

    print_matrix("Matrix 1", &m1);
    print_matrix("Matrix 2", &m2);
    println!();
    print_matrix(
        "Monte Carlo (m1 * m2)",
        &monte_carlo::matmul(&m1, &m2, &mut sampler)?,
    );
    print_matrix("Deterministic (m1 * m2)", &m1.matmul(&m2)?);

    Ok(())
}
