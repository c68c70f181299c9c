use switchyard_macros::capability;

#[capability]
fn merge(left: Vec<i32>, right: Vec<i32>) -> Result<Vec<i32>, String> {
    Ok([left, right].concat())
}

fn main() {}
