pub mod dimacs_lexer;

use crate::graph::{Arc, Graph, Header};
use dimacs_lexer::{lex_line_dimacs, DimacsToken};
use log::{error, warn};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    process,
};

/// Parses a graph in the DIMACS arc-list format, referenced by the file path.
/// The file gets read completely and we create the corresponding data structure.
///
/// # Examples
///
/// ```
/// use dimacs2plain::Graph;
/// use dimacs2plain::parser;
///
/// let file_path = "./tests/data/small_ex.gr";
///
/// let graph: Graph = parser::parse_graph(file_path);
/// ```
///
/// # Panics
///
/// The function panics for an invalid file path and for malformed problem or arc lines.
#[inline]
pub fn parse_graph(path: &str) -> Graph {
    let file = open_file_savely(path);

    let lines = BufReader::new(file)
        .lines()
        .map(|line| line.expect("Unable to read line"))
        .collect::<Vec<String>>();

    build_graph(lines)
}

/// Builds a graph from the lines of a DIMACS arc list.
///
/// Comments are skipped, the problem line yields the header, and each arc line
/// appends one arc in input order. Lines whose first token is neither `c`, `p`,
/// nor `a` carry no graph data and are skipped as well. A problem or arc line
/// that does not lex is a fatal format error, as is an input without any
/// problem line.
pub fn build_graph(lines: Vec<String>) -> Graph {
    let mut header: Option<Header> = None;
    let mut arcs: Vec<Arc> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        match lex_line_dimacs(line.trim()) {
            Ok((_, DimacsToken::Comment)) => (),
            Ok((
                _,
                DimacsToken::Header {
                    num_nodes,
                    num_arcs,
                },
            )) => {
                if header.is_some() {
                    warn!("Found more than one problem line. The last one wins.");
                }
                header = Some(Header {
                    num_nodes,
                    num_arcs,
                });
            }
            Ok((_, DimacsToken::Arc { tail, head, weight })) => arcs.push((tail, head, weight)),
            Err(_) => match line.split_whitespace().next() {
                Some("p") | Some("a") => panic!(
                    "Was not able to parse line {}. String was {:?}",
                    index + 1,
                    line
                ),
                _ => (),
            },
        }
    }

    match header {
        Some(header) => Graph { header, arcs },
        None => panic!(
            "The input contains no problem line. Hence, we can't determine the node and arc counts."
        ),
    }
}

/// Tries to open a file.
/// If an error occurs the program prints the error and exists.
pub fn open_file_savely(path: &str) -> File {
    match File::open(path) {
        Ok(x) => x,
        Err(err) => {
            error!(
                "The following error code occured while trying to open the file {}:\n{}\nAborting...",
                path, err
            );
            process::exit(1);
        }
    }
}
