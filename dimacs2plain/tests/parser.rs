use dimacs2plain::parser;
use dimacs2plain::Graph;
use std::io::Write;

#[test]
fn graph_parsing_test() {
    let mut graph: Graph = parser::parse_graph("./tests/data/small_ex.gr");

    assert_eq!(graph.header.num_nodes, 4);
    assert_eq!(graph.header.num_arcs, 5);
    assert_eq!(graph.arcs.len(), 5);

    // arcs keep their input order until the sort step
    assert_eq!(graph.arcs[4], (2, 4, 7));

    graph.sort_arcs();
    assert_eq!(
        graph.arcs,
        vec![(1, 2, 2), (1, 3, 4), (2, 3, 1), (2, 4, 7), (3, 4, 3)]
    );
}

#[test]
fn parsing_written_file_test() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "c written during the test run").unwrap();
    writeln!(file, "p sp 2 1").unwrap();
    writeln!(file, "a 2 1 -3").unwrap();

    let graph = parser::parse_graph(file.path().to_str().unwrap());

    assert_eq!(graph.header.num_nodes, 2);
    assert_eq!(graph.header.num_arcs, 1);
    assert_eq!(graph.arcs, vec![(2, 1, -3)]);
}
