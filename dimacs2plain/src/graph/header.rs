use std::fmt::{Display, Formatter};

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Header {
    pub num_nodes: usize,
    pub num_arcs: usize,
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.num_nodes, self.num_arcs)
    }
}
