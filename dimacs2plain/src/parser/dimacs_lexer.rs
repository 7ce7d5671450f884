use nom::{
    branch::alt,
    bytes::complete::is_not,
    character::complete::{char, digit1, space1},
    combinator::{map, opt, recognize, value},
    multi::many_m_n,
    sequence::{pair, preceded},
    IResult, Parser,
};

use crate::graph::{Node, Weight};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// A classification for the different kinds of lines a DIMACS arc list contains
pub enum DimacsToken {
    /// A comment in the arc list. It starts with a 'c '
    Comment,
    /// The problem line of the format p <problem-type> #NODES #ARCS
    Header { num_nodes: usize, num_arcs: usize },
    /// An arc of the format a <tail> <head> <weight> with a possibly negative weight
    Arc {
        tail: Node,
        head: Node,
        weight: Weight,
    },
}

use DimacsToken::*;

/// Lexes a line and checks whether it is a comment, the problem line, or an arc.
///
/// # Examples
///
/// ```
/// use dimacs2plain::dimacs_lexer::*;
///
/// let comment_str = "c 9th DIMACS Implementation Challenge";
/// assert_eq!(lex_line_dimacs(comment_str).unwrap().1, DimacsToken::Comment);
///
/// let header_str = "p sp 3 2";
/// assert_eq!(
///     lex_line_dimacs(header_str).unwrap().1,
///     DimacsToken::Header { num_nodes: 3, num_arcs: 2 }
/// );
///
/// let arc_str = "a 1 2 7";
/// assert_eq!(
///     lex_line_dimacs(arc_str).unwrap().1,
///     DimacsToken::Arc { tail: 1, head: 2, weight: 7 }
/// );
/// ```
#[inline]
pub fn lex_line_dimacs(line: &str) -> IResult<&str, DimacsToken> {
    alt((lex_comment, lex_header, lex_arc)).parse(line)
}

// lexes the problem line of the format "p <problem-type> #NODES #ARCS".
// The problem-type token (conventionally "sp") is recognized but ignored.
fn lex_header(line: &str) -> IResult<&str, DimacsToken> {
    map(
        preceded(
            (char('p'), space1, is_not(" \t")),
            recognize(many_m_n(2, 2, pair(space1, digit1))),
        ),
        |out: &str| {
            let nums: Vec<usize> = split_numbers(out);
            Header {
                num_nodes: nums[0],
                num_arcs: nums[1],
            }
        },
    )
    .parse(line)
}

// lexes an arc of the format "a <tail> <head> <weight>" as three signed numbers
fn lex_arc(line: &str) -> IResult<&str, DimacsToken> {
    map(
        preceded(
            char('a'),
            recognize(many_m_n(3, 3, pair(space1, signed_digit1))),
        ),
        |out: &str| {
            let nums: Vec<i64> = split_numbers(out);
            Arc {
                tail: nums[0],
                head: nums[1],
                weight: nums[2],
            }
        },
    )
    .parse(line)
}

// identifies a comment by its leading 'c'
fn lex_comment(line: &str) -> IResult<&str, DimacsToken> {
    value(Comment, char('c')).parse(line)
}

// lexes a sequence of digits that may start with a minus sign
fn signed_digit1(line: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), digit1)).parse(line)
}

// parses every whitespace separated number of the recognized span into a T
pub(super) fn split_numbers<T: std::str::FromStr>(out: &str) -> Vec<T> {
    out.split_whitespace()
        .map(|num: &str| {
            num.parse::<T>().unwrap_or_else(|_| {
                panic!(
                    "Was not able to parse {} for a graph line. String was {}",
                    std::any::type_name::<T>(),
                    out
                )
            })
        })
        .collect::<Vec<T>>()
}
