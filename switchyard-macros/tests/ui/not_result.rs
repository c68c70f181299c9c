use switchyard_macros::capability;

#[capability]
fn sort(mut input: Vec<i32>) -> Vec<i32> {
    input.sort();
    input
}

fn main() {}
