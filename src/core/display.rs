use crate::{MaxProb, Network, Shape, Tensor};
use num_traits::Float;
use prettytable::{format, Cell, Row, Table};
use std::{
    any::type_name,
    fmt::{Debug, Display, Formatter, Result},
};

impl<T: Debug> Debug for Tensor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Tensor")
            .field("dtype", &type_name::<T>())
            .field("elems", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Display + Copy> Display for Tensor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_empty() {
            return writeln!(f, "{{ }}");
        }

        let row = Row::new(
            self.data
                .iter()
                .map(|elem| Cell::new(&format!("{:.6}", elem)))
                .collect::<Vec<Cell>>(),
        );

        let mut table = Table::init(vec![row]);
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        write!(f, "{}", table)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "( {}, {} )", self.input, self.output)
    }
}

impl<T: Display> Display for MaxProb<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{{ idx: {}, prob: {:.6} }}", self.index, self.prob)
    }
}

// One row per layer.
impl<F: Float> Display for Network<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(vec![
            Cell::new("layer"),
            Cell::new("shape"),
            Cell::new("activation"),
        ]));

        for (depth, layer) in self.layers().iter().enumerate() {
            table.add_row(Row::new(vec![
                Cell::new(&depth.to_string()),
                Cell::new(&layer.shape().to_string()),
                Cell::new(&layer.activation().to_string()),
            ]));
        }

        write!(f, "{}", table)
    }
}
