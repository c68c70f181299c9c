use switchyard_macros::capability;

struct Sorter;

impl Sorter {
    #[capability]
    fn sort(&self) -> Result<Vec<i32>, String> {
        Ok(Vec::new())
    }
}

fn main() {
    let _ = Sorter;
}
