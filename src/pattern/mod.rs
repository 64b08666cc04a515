//! Graph patterns: `(this0:Person)-[this1:KNOWS*1..3]->(this2)`.
//!
//! A `Pattern` is a sequence of segments that must alternate node and
//! relationship, starting and ending with a node. `Pattern::new(...).related(...)`
//! keeps that shape by construction; `Pattern::from_segments` accepts any
//! sequence and reports a malformed one when compiled.

mod hop_range;

pub use hop_range::HopRange;

use crate::environment::Environment;
use crate::errors::{BuildResult, CypherBuildError};
use crate::expressions::MapExpr;
use crate::references::{NodeRef, PathRef, RelationshipRef};
use crate::to_cypher::{compile_joined, ToCypher};
use crate::utils::escape_identifier;

/// Node segment: `(variable:Label1:Label2 { key: value })`
#[derive(Debug, Clone, Default)]
pub struct NodePattern {
    variable: Option<NodeRef>,
    labels: Vec<String>,
    properties: Option<MapExpr>,
}

impl NodePattern {
    pub fn new(node: &NodeRef) -> Self {
        Self {
            variable: Some(node.clone()),
            ..Self::default()
        }
    }

    /// `()` with no variable
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn properties(mut self, properties: MapExpr) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn variable(&self) -> Option<&NodeRef> {
        self.variable.as_ref()
    }
}

impl From<&NodeRef> for NodePattern {
    fn from(node: &NodeRef) -> Self {
        NodePattern::new(node)
    }
}

impl From<NodeRef> for NodePattern {
    fn from(node: NodeRef) -> Self {
        Self {
            variable: Some(node),
            ..Self::default()
        }
    }
}

/// Compile `variable`, labels/types and inline properties into the inner text of a segment
fn segment_body(
    variable: Option<String>,
    qualifier: String,
    properties: Option<&MapExpr>,
    env: &mut Environment,
) -> BuildResult<String> {
    let mut body = variable.unwrap_or_default();
    body.push_str(&qualifier);
    if let Some(properties) = properties {
        let map = properties.to_cypher(env)?;
        if !body.is_empty() {
            body.push(' ');
        }
        body.push_str(&map);
    }
    Ok(body)
}

impl ToCypher for NodePattern {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        let variable = self
            .variable
            .as_ref()
            .map(|v| v.to_cypher(env))
            .transpose()?;
        let labels: String = self
            .labels
            .iter()
            .map(|label| format!(":{}", escape_identifier(label)))
            .collect();
        let body = segment_body(variable, labels, self.properties.as_ref(), env)?;
        Ok(format!("({})", body))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// `-[]->`
    #[default]
    Right,
    /// `<-[]-`
    Left,
    /// `-[]-`
    Undirected,
}

/// Relationship segment: `-[variable:TYPE1|TYPE2*1..3 { key: value }]->`
#[derive(Debug, Clone, Default)]
pub struct RelationshipPattern {
    variable: Option<RelationshipRef>,
    direction: Direction,
    types: Vec<String>,
    properties: Option<MapExpr>,
    length: Option<HopRange>,
}

impl RelationshipPattern {
    pub fn new(relationship: &RelationshipRef) -> Self {
        Self {
            variable: Some(relationship.clone()),
            ..Self::default()
        }
    }

    /// `-[]->` with no variable
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn rel_type(mut self, rel_type: impl Into<String>) -> Self {
        self.types.push(rel_type.into());
        self
    }

    /// Alternative types, rendered `:A|B`
    pub fn types(mut self, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// `<-[]-`
    pub fn incoming(self) -> Self {
        self.direction(Direction::Left)
    }

    /// `-[]-`
    pub fn undirected(self) -> Self {
        self.direction(Direction::Undirected)
    }

    pub fn properties(mut self, properties: MapExpr) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn length(mut self, length: HopRange) -> Self {
        self.length = Some(length);
        self
    }

    pub fn variable(&self) -> Option<&RelationshipRef> {
        self.variable.as_ref()
    }
}

impl ToCypher for RelationshipPattern {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        if let Some(length) = &self.length {
            length.validate()?;
        }

        let variable = self
            .variable
            .as_ref()
            .map(|v| v.to_cypher(env))
            .transpose()?;
        let mut qualifier = String::new();
        if !self.types.is_empty() {
            let types = self
                .types
                .iter()
                .map(|t| escape_identifier(t).into_owned())
                .collect::<Vec<_>>()
                .join("|");
            qualifier.push(':');
            qualifier.push_str(&types);
        }
        if let Some(length) = &self.length {
            qualifier.push_str(&length.to_string());
        }
        let body = segment_body(variable, qualifier, self.properties.as_ref(), env)?;

        Ok(match self.direction {
            Direction::Right => format!("-[{}]->", body),
            Direction::Left => format!("<-[{}]-", body),
            Direction::Undirected => format!("-[{}]-", body),
        })
    }
}

#[derive(Debug, Clone)]
pub enum PatternSegment {
    Node(NodePattern),
    Relationship(RelationshipPattern),
}

impl ToCypher for PatternSegment {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        match self {
            PatternSegment::Node(node) => node.to_cypher(env),
            PatternSegment::Relationship(rel) => rel.to_cypher(env),
        }
    }
}

/// One linear pattern, optionally bound to a path variable (`p0 = (a)-->(b)`)
#[derive(Debug, Clone)]
pub struct Pattern {
    path: Option<PathRef>,
    segments: Vec<PatternSegment>,
}

impl Pattern {
    pub fn new(start: impl Into<NodePattern>) -> Self {
        Self {
            path: None,
            segments: vec![PatternSegment::Node(start.into())],
        }
    }

    /// Raw segment sequence; its shape is checked when compiled
    pub fn from_segments(segments: Vec<PatternSegment>) -> Self {
        Self {
            path: None,
            segments,
        }
    }

    /// Extend the pattern with `-[relationship]->(to)`
    pub fn related(mut self, relationship: RelationshipPattern, to: impl Into<NodePattern>) -> Self {
        self.segments
            .push(PatternSegment::Relationship(relationship));
        self.segments.push(PatternSegment::Node(to.into()));
        self
    }

    pub fn assign_to(mut self, path: &PathRef) -> Self {
        self.path = Some(path.clone());
        self
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Check that segments alternate node / relationship and end on a node
    pub fn validate(&self) -> BuildResult<()> {
        if self.segments.is_empty() {
            return Err(CypherBuildError::EmptyPattern);
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match (position % 2 == 0, segment) {
                (true, PatternSegment::Node(_)) | (false, PatternSegment::Relationship(_)) => {}
                (true, PatternSegment::Relationship(_)) => {
                    return Err(CypherBuildError::malformed_pattern_at(
                        position,
                        "expected a node segment, found a relationship",
                    ));
                }
                (false, PatternSegment::Node(_)) => {
                    return Err(CypherBuildError::malformed_pattern_at(
                        position,
                        "expected a relationship segment, found a node",
                    ));
                }
            }
        }
        if self.segments.len() % 2 == 0 {
            return Err(CypherBuildError::malformed_pattern_at(
                self.segments.len() - 1,
                "pattern must end with a node segment",
            ));
        }
        Ok(())
    }
}

impl ToCypher for Pattern {
    fn to_cypher(&self, env: &mut Environment) -> BuildResult<String> {
        self.validate()?;
        let body = compile_joined(&self.segments, env, "")?;
        match &self.path {
            Some(path) => Ok(format!("{} = {}", path.to_cypher(env)?, body)),
            None => Ok(body),
        }
    }
}
