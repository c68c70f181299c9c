use switchyard_macros::capability;

#[capability]
fn first_word(input: &'static str) -> Result<&str, String> {
    Ok(input.split_whitespace().next().unwrap_or_default())
}

fn main() {}
