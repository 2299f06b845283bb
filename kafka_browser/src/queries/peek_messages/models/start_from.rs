#[derive(Debug, Copy, Clone)]
pub enum StartFrom {
    Beginning,
    Latest,
}
