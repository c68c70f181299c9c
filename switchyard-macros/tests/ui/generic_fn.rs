use switchyard_macros::capability;

#[capability]
fn sort<T: Ord>(input: Vec<T>) -> Result<Vec<T>, String> {
    Ok(input)
}

fn main() {}
