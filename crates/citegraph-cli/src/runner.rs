//! Executes parsed commands against a citation graph and records outcomes.
//!
//! Graph failures do not stop a run: each one becomes an `Outcome::Error`
//! and execution moves on to the next command.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use citegraph_core::{Paper, PaperId};
use citegraph_graph::{CitationGraph, GraphError};

use crate::error::Result;
use crate::script::{self, Command};

/// Data returned by a query command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Value {
    Ids(Vec<PaperId>),
    Flag(bool),
    Id(PaperId),
    Paper(Paper),
}

/// Result of a single command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Ok {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },
    Error {
        kind: String,
        id: PaperId,
        message: String,
    },
}

impl From<GraphError<PaperId>> for Outcome {
    fn from(e: GraphError<PaperId>) -> Self {
        Outcome::Error {
            kind: e.kind().to_string(),
            id: e.id().clone(),
            message: e.to_string(),
        }
    }
}

/// One executed command and its outcome.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    pub line: usize,
    pub command: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Report {
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error { .. })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ", self.line, self.command)?;
        match &self.outcome {
            Outcome::Ok { value: None } => write!(f, "ok"),
            Outcome::Ok { value: Some(value) } => match value {
                Value::Ids(ids) => {
                    let joined: Vec<&str> = ids.iter().map(PaperId::as_str).collect();
                    write!(f, "[{}]", joined.join(", "))
                }
                Value::Flag(flag) => write!(f, "{flag}"),
                Value::Id(id) => write!(f, "{id}"),
                Value::Paper(paper) => match &paper.title {
                    Some(title) => write!(f, "{} \"{title}\"", paper.id),
                    None => write!(f, "{}", paper.id),
                },
            },
            Outcome::Error { kind, id, .. } => write!(f, "failed: {kind} ({id})"),
        }
    }
}

/// Owns a graph and applies commands to it.
pub struct ScriptRunner {
    graph: CitationGraph<Paper>,
    failures: usize,
}

impl ScriptRunner {
    pub fn new(root_id: PaperId) -> Self {
        Self {
            graph: CitationGraph::new(root_id),
            failures: 0,
        }
    }

    pub fn graph(&self) -> &CitationGraph<Paper> {
        &self.graph
    }

    /// Number of commands that have failed so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Execute one command and report its outcome.
    pub fn execute(&mut self, line: usize, command: &Command) -> Report {
        let outcome = match self.apply(command) {
            Ok(value) => Outcome::Ok { value },
            Err(e) => {
                self.failures += 1;
                tracing::debug!(line, command = command.name(), kind = e.kind(), "Command failed");
                e.into()
            }
        };
        Report {
            line,
            command: command.name(),
            outcome,
        }
    }

    /// Execute a sequence of commands in order.
    pub fn run(&mut self, commands: &[(usize, Command)]) -> Vec<Report> {
        commands
            .iter()
            .map(|(line, command)| self.execute(*line, command))
            .collect()
    }

    /// Parse and execute a script file. A malformed script runs nothing.
    pub fn run_file(&mut self, path: &Path) -> Result<Vec<Report>> {
        let source = std::fs::read_to_string(path)?;
        let commands = script::parse_script(&source)?;
        tracing::info!(path = %path.display(), commands = commands.len(), "Running script");
        Ok(self.run(&commands))
    }

    fn apply(&mut self, command: &Command) -> std::result::Result<Option<Value>, GraphError<PaperId>> {
        let graph = &mut self.graph;
        let value = match command {
            Command::Create { id, parents } => {
                graph.create_with_parents(id.clone(), parents)?;
                None
            }
            Command::Cite { child, parent } => {
                graph.add_citation(child, parent)?;
                None
            }
            Command::Remove { id } => {
                graph.remove(id)?;
                None
            }
            Command::Children { id } => Some(Value::Ids(graph.get_children(id)?)),
            Command::Parents { id } => Some(Value::Ids(graph.get_parents(id)?)),
            Command::Exists { id } => Some(Value::Flag(graph.exists(id))),
            Command::Get { id } => Some(Value::Paper(graph.get(id)?.clone())),
            Command::Title { id, title } => {
                graph.get_mut(id)?.title = Some(title.clone());
                None
            }
            Command::Root => Some(Value::Id(graph.root_id())),
        };
        Ok(value)
    }
}
