mod header;

pub use header::Header;
use std::fmt::{Display, Formatter};

pub type Node = i64;
pub type Weight = i64;
pub type Arc = (Node, Node, Weight);

#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Graph {
    pub header: Header,
    pub arcs: Vec<Arc>,
}

impl Graph {
    /// Sorts the arcs ascending by tail, ties broken by head, then weight.
    ///
    /// The sort is stable, so sorting an already sorted arc sequence leaves
    /// it unchanged.
    pub fn sort_arcs(&mut self) {
        self.arcs.sort();
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header)?;

        self.arcs
            .iter()
            .try_for_each(|(tail, head, weight)| writeln!(f, "{tail} {head} {weight}"))
    }
}

#[cfg(test)]
mod test {
    use super::{Graph, Header};

    #[test]
    fn display_graph() {
        let graph = Graph {
            header: Header {
                num_nodes: 3,
                num_arcs: 2,
            },
            arcs: vec![(1, 2, 7), (2, 3, 5)],
        };

        let expected = "3 2
1 2 7
2 3 5
";

        assert_eq!(graph.to_string(), expected);
    }

    #[test]
    fn sort_arcs() {
        let mut graph = Graph {
            header: Header {
                num_nodes: 4,
                num_arcs: 6,
            },
            arcs: vec![
                (2, 3, 5),
                (1, 2, 7),
                (2, 3, -5),
                (1, 2, 7),
                (2, 1, 3),
                (1, 4, 0),
            ],
        };

        graph.sort_arcs();

        assert_eq!(
            graph.arcs,
            vec![
                (1, 2, 7),
                (1, 2, 7),
                (1, 4, 0),
                (2, 1, 3),
                (2, 3, -5),
                (2, 3, 5),
            ]
        );

        // sorting again must not change anything
        let sorted = graph.arcs.clone();
        graph.sort_arcs();
        assert_eq!(graph.arcs, sorted);
    }
}
