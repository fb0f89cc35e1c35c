//! Edge-list input files.
//!
//! The CLI reads graphs from a small line-based text format:
//!
//! ```text
//! # a triangle
//! nodes 3
//! 0 1
//! 1 2
//! 2 0
//! ```
//!
//! Blank lines and everything after `#` are ignored. A single `nodes <count>`
//! header must come before the first edge; each edge is a pair of node ids.
//! Reading does not stop at the first bad line: every problem is collected
//! into one [`InputError`] so they can be reported together.

use std::ops::Range;

use log::debug;
use thiserror::Error;
use winnow::{
    Parser as _,
    combinator::{preceded, repeat},
    error::ModalResult,
    stream::LocatingSlice,
    token::take_while,
};

use sprung::graph::{Graph, GraphError, NodeId};

/// Largest node count a `nodes` header may declare.
///
/// Every relaxation step is quadratic in the node count, so anything above
/// this is rejected before memory is reserved for the graph.
pub const MAX_NODE_COUNT: usize = 100_000;

type Input<'a> = LocatingSlice<&'a str>;

/// What went wrong on a single line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineErrorKind {
    #[error("missing `nodes <count>` header")]
    MissingHeader,

    #[error("duplicate `nodes` header")]
    DuplicateHeader,

    #[error("`nodes` header takes exactly one count")]
    MalformedHeader,

    #[error("node count {count} exceeds the limit of {max}")]
    NodeCountTooLarge { count: usize, max: usize },

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("expected two node ids, found {0} tokens")]
    WrongTokenCount(usize),

    #[error("edge listed before the `nodes` header")]
    EdgeBeforeHeader,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A problem located on one line of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    kind: LineErrorKind,
    line: usize,
    span: Range<usize>,
}

impl LineError {
    fn new(kind: impl Into<LineErrorKind>, line: usize, span: Range<usize>) -> Self {
        Self {
            kind: kind.into(),
            line,
            span,
        }
    }

    /// Returns what went wrong.
    pub fn kind(&self) -> &LineErrorKind {
        &self.kind
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the byte range of the offending text in the source.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns a hint on how to fix the problem, if there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            LineErrorKind::MissingHeader | LineErrorKind::EdgeBeforeHeader => {
                Some("start the file with a `nodes <count>` line")
            }
            LineErrorKind::DuplicateHeader => Some("declare the node count only once"),
            LineErrorKind::NodeCountTooLarge { .. } => {
                Some("split the graph or lay out a smaller subgraph")
            }
            LineErrorKind::InvalidNumber(_) => Some("node ids and counts are non-negative integers"),
            LineErrorKind::WrongTokenCount(_) => Some("write each edge as `<a> <b>` on its own line"),
            LineErrorKind::Graph(_) => Some("node ids must be smaller than the declared node count"),
            LineErrorKind::MalformedHeader => None,
        }
    }
}

/// All problems found while reading an edge list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid edge list ({} error(s))", .errors.len())]
pub struct InputError {
    errors: Vec<LineError>,
}

impl InputError {
    /// Returns each problem, in source order.
    pub fn errors(&self) -> &[LineError] {
        &self.errors
    }
}

/// Parses an edge list into a [`Graph`].
///
/// # Errors
///
/// Returns an [`InputError`] listing every malformed line, or the missing
/// header.
pub fn parse_edge_list(src: &str) -> Result<Graph, InputError> {
    let mut graph: Option<Graph> = None;
    let mut errors = Vec::new();
    let mut offset = 0;

    for (index, raw_line) in src.split_inclusive('\n').enumerate() {
        let line = index + 1;
        let content = raw_line.split('#').next().unwrap_or_default();
        let tokens = tokenize(content, offset);
        offset += raw_line.len();

        let Some((first, first_span)) = tokens.first().cloned() else {
            continue;
        };

        if first == "nodes" {
            if graph.is_some() {
                errors.push(LineError::new(LineErrorKind::DuplicateHeader, line, first_span));
                continue;
            }
            let [_, (count, count_span)] = tokens.as_slice() else {
                errors.push(LineError::new(
                    LineErrorKind::MalformedHeader,
                    line,
                    line_span(&tokens),
                ));
                continue;
            };
            match parse_number(count, count_span.clone(), line) {
                Ok(node_count) if node_count > MAX_NODE_COUNT => {
                    errors.push(LineError::new(
                        LineErrorKind::NodeCountTooLarge {
                            count: node_count,
                            max: MAX_NODE_COUNT,
                        },
                        line,
                        count_span.clone(),
                    ));
                }
                Ok(node_count) => graph = Some(Graph::new(node_count)),
                Err(err) => errors.push(err),
            }
            continue;
        }

        let [(a, a_span), (b, b_span)] = tokens.as_slice() else {
            errors.push(LineError::new(
                LineErrorKind::WrongTokenCount(tokens.len()),
                line,
                line_span(&tokens),
            ));
            continue;
        };
        let (a, b) = match (
            parse_number(a, a_span.clone(), line),
            parse_number(b, b_span.clone(), line),
        ) {
            (Ok(a), Ok(b)) => (a, b),
            (a, b) => {
                errors.extend(a.err());
                errors.extend(b.err());
                continue;
            }
        };

        let Some(graph) = graph.as_mut() else {
            errors.push(LineError::new(
                LineErrorKind::EdgeBeforeHeader,
                line,
                line_span(&tokens),
            ));
            continue;
        };
        if let Err(err) = graph.add_edge(a, b) {
            let GraphError::OutOfRange { node, .. } = err;
            let span = if node == a { a_span } else { b_span };
            errors.push(LineError::new(err, line, span.clone()));
        }
    }

    match graph {
        Some(graph) if errors.is_empty() => {
            debug!(
                node_count = graph.node_count(),
                edge_count = graph.edge_count();
                "Edge list parsed"
            );
            Ok(graph)
        }
        None if errors.is_empty() => Err(InputError {
            errors: vec![LineError::new(LineErrorKind::MissingHeader, 1, 0..0)],
        }),
        _ => Err(InputError { errors }),
    }
}

/// Parse one whitespace-delimited token, skipping leading whitespace
fn token<'a>(input: &mut Input<'a>) -> ModalResult<(&'a str, Range<usize>)> {
    preceded(
        take_while(0.., char::is_whitespace),
        take_while(1.., |c: char| !c.is_whitespace()).with_span(),
    )
    .parse_next(input)
}

/// Splits a line into whitespace-separated tokens with absolute byte spans.
///
/// `offset` is the position of the line within the whole source.
fn tokenize(content: &str, offset: usize) -> Vec<(&str, Range<usize>)> {
    let mut input = LocatingSlice::new(content);
    let tokens: ModalResult<Vec<_>> = repeat(0.., token).parse_next(&mut input);

    // A failed token only ends the repetition, so this is never an error
    tokens
        .unwrap_or_default()
        .into_iter()
        .map(|(text, span)| (text, offset + span.start..offset + span.end))
        .collect()
}

fn parse_number(token: &str, span: Range<usize>, line: usize) -> Result<NodeId, LineError> {
    token
        .parse()
        .map_err(|_| LineError::new(LineErrorKind::InvalidNumber(token.to_string()), line, span))
}

/// Span from the first to the last token of a line.
fn line_span(tokens: &[(&str, Range<usize>)]) -> Range<usize> {
    match (tokens.first(), tokens.last()) {
        (Some((_, first)), Some((_, last))) => first.start..last.end,
        _ => 0..0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(err: &InputError) -> Vec<LineErrorKind> {
        err.errors().iter().map(|e| e.kind().clone()).collect()
    }

    #[test]
    fn test_parse_triangle() {
        let graph = parse_edge_list("# triangle\nnodes 3\n0 1\n1 2\n2 0\n").unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.neighbors(0).unwrap().iter().eq(&[1, 2]));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let src = "\n  nodes 2   # two nodes\n\n0 1 # the edge\n   \n";
        let graph = parse_edge_list(src).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_no_trailing_newline() {
        let graph = parse_edge_list("nodes 2\n1 0").unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_nodes_without_edges() {
        let graph = parse_edge_list("nodes 4").unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_empty_input() {
        let err = parse_edge_list("# nothing here\n").unwrap_err();
        assert_eq!(kinds(&err), vec![LineErrorKind::MissingHeader]);
    }

    #[test]
    fn test_edge_before_header() {
        let err = parse_edge_list("0 1\nnodes 2\n").unwrap_err();
        assert_eq!(kinds(&err), vec![LineErrorKind::EdgeBeforeHeader]);
        assert_eq!(err.errors()[0].line(), 1);
        assert_eq!(err.errors()[0].span(), 0..3);
    }

    #[test]
    fn test_duplicate_header() {
        let err = parse_edge_list("nodes 2\nnodes 3\n").unwrap_err();
        assert_eq!(kinds(&err), vec![LineErrorKind::DuplicateHeader]);
        assert_eq!(err.errors()[0].span(), 8..13);
    }

    #[test]
    fn test_malformed_header() {
        let err = parse_edge_list("nodes\n").unwrap_err();
        assert_eq!(kinds(&err), vec![LineErrorKind::MalformedHeader]);
    }

    #[test]
    fn test_invalid_numbers() {
        let err = parse_edge_list("nodes 3\n0 x\n-1 y\n").unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                LineErrorKind::InvalidNumber("x".to_string()),
                LineErrorKind::InvalidNumber("-1".to_string()),
                LineErrorKind::InvalidNumber("y".to_string()),
            ]
        );
        assert_eq!(err.errors()[0].span(), 10..11);
        assert_eq!(err.errors()[1].line(), 3);
    }

    #[test]
    fn test_node_count_limit() {
        let graph = parse_edge_list(&format!("nodes {MAX_NODE_COUNT}\n")).unwrap();
        assert_eq!(graph.node_count(), MAX_NODE_COUNT);

        let err = parse_edge_list("nodes 18446744073709551615\n0 1\n").unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                LineErrorKind::NodeCountTooLarge {
                    count: usize::MAX,
                    max: MAX_NODE_COUNT
                },
                LineErrorKind::EdgeBeforeHeader,
            ]
        );
        assert_eq!(err.errors()[0].span(), 6..26);
        assert!(err.errors()[0].help().is_some());
    }

    #[test]
    fn test_wrong_token_count() {
        let err = parse_edge_list("nodes 3\n0 1 2\n").unwrap_err();
        assert_eq!(kinds(&err), vec![LineErrorKind::WrongTokenCount(3)]);
        assert_eq!(err.errors()[0].span(), 8..13);
    }

    #[test]
    fn test_out_of_range_points_at_bad_id() {
        let err = parse_edge_list("nodes 2\n0 5\n").unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![LineErrorKind::Graph(GraphError::OutOfRange {
                node: 5,
                node_count: 2
            })]
        );
        assert_eq!(err.errors()[0].span(), 10..11);
        assert!(err.errors()[0].help().is_some());
    }

    #[test]
    fn test_collects_every_error() {
        let err = parse_edge_list("nodes 2\n0 9\n1\n1 0\nnodes 4\n").unwrap_err();
        assert_eq!(err.errors().len(), 3);
        assert_eq!(err.to_string(), "invalid edge list (3 error(s))");
    }

    #[test]
    fn test_tokenize_spans() {
        let tokens = tokenize("  12\t 7 ", 100);
        assert_eq!(tokens, vec![("12", 102..104), ("7", 106..107)]);
        assert!(tokenize(" \t\n", 0).is_empty());
        assert_eq!(tokenize("é 1\n", 4), vec![("é", 4..6), ("1", 7..8)]);
    }
}
