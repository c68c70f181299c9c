use switchyard_macros::capability;

#[capability(key = "ascending")]
fn ascending(mut input: Vec<i32>) -> Result<Vec<i32>, String> {
    input.sort();
    Ok(input)
}

fn main() {}
