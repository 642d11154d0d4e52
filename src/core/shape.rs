/// Widths a component accepts and produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub input: usize,
    pub output: usize,
}

impl Shape {
    pub fn new(input: usize, output: usize) -> Shape {
        Shape { input, output }
    }

    /// Whether `next` can consume what `self` produces.
    pub fn feeds(&self, next: &Shape) -> bool {
        self.output == next.input
    }
}
