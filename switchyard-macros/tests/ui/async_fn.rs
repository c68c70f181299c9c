use switchyard_macros::capability;

#[capability]
async fn sort(input: Vec<i32>) -> Result<Vec<i32>, String> {
    Ok(input)
}

fn main() {}
