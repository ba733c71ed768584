use tmatrix::{DynamicMatrix, DynamicVector, MResult};

fn main() -> MResult<()> {
    let m1 = DynamicMatrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
    let m2 = DynamicMatrix::from_rows(vec![vec![5, 6], vec![7, 8]])?;

    // product and sum
    println!("m1 * m2 =\n{}", (&m1 * &m2)?);
    println!("m1 + m2 =\n{}", (&m1 + &m2)?);

    let v1 = DynamicVector::from_vec(vec![2, 3])?;
    let v2 = DynamicVector::from_vec(vec![4, 5])?;
    println!("v1 . v2 = {}", (&v1 * &v2)?);
    println!("m1 * v1 = {}", (&m1 * &v1)?);

    // checked access reports errors instead of panicking
    match m1.get(0, 2) {
        Ok(x) => println!("m1[0][2] = {x}"),
        Err(e) => println!("m1[0][2]: {e}"),
    }
    Ok(())
}
