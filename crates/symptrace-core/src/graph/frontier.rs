//! Frontier shared by full runs and interactive sessions

use std::collections::{BTreeSet, VecDeque};

use serde::Serialize;

use super::GraphModel;

/// Removal order of the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Queue: remove from the head
    Fifo,
    /// Stack: remove from the top
    Lifo,
}

/// A discovered node with the path that discovered it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontierEntry {
    pub node: String,
    pub path: Vec<String>,
}

/// Queue or stack of pending entries.
///
/// Entries are stored oldest first; for `Lifo` the back of the deque is the top.
#[derive(Debug, Clone)]
pub struct Frontier {
    discipline: Discipline,
    entries: VecDeque<FrontierEntry>,
}

impl Frontier {
    pub fn empty(discipline: Discipline) -> Self {
        Frontier {
            discipline,
            entries: VecDeque::new(),
        }
    }

    /// Frontier holding only `(start, [start])`
    pub fn seeded(discipline: Discipline, start: &str) -> Self {
        let mut frontier = Self::empty(discipline);
        frontier.entries.push_back(FrontierEntry {
            node: start.to_string(),
            path: vec![start.to_string()],
        });
        frontier
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Next entry to be removed, without removing it
    pub fn peek(&self) -> Option<&FrontierEntry> {
        match self.discipline {
            Discipline::Fifo => self.entries.front(),
            Discipline::Lifo => self.entries.back(),
        }
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        match self.discipline {
            Discipline::Fifo => self.entries.pop_front(),
            Discipline::Lifo => self.entries.pop_back(),
        }
    }

    /// Node ids in storage order (queue head to tail, stack bottom to top)
    pub fn nodes(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.node.clone()).collect()
    }

    /// Schedule every unvisited successor of `entry`, marking it visited.
    ///
    /// Stacks receive successors in reverse so the first-declared one is on top.
    /// Returns the number of newly scheduled nodes.
    pub fn expand(
        &mut self,
        graph: &GraphModel,
        entry: &FrontierEntry,
        visited: &mut BTreeSet<String>,
    ) -> usize {
        let successors = graph.successors(&entry.node);
        let ordered: Box<dyn Iterator<Item = &String>> = match self.discipline {
            Discipline::Fifo => Box::new(successors.iter()),
            Discipline::Lifo => Box::new(successors.iter().rev()),
        };

        let mut scheduled = 0;
        for successor in ordered {
            if visited.insert(successor.clone()) {
                let mut path = entry.path.clone();
                path.push(successor.clone());
                self.entries.push_back(FrontierEntry {
                    node: successor.clone(),
                    path,
                });
                scheduled += 1;
            }
        }
        scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan() -> GraphModel {
        GraphModel::new("T").with_edges("s", ["a", "b", "c"])
    }

    fn start_entry() -> FrontierEntry {
        FrontierEntry {
            node: "s".into(),
            path: vec!["s".into()],
        }
    }

    #[test]
    fn test_fifo_keeps_declared_order() {
        let graph = fan();
        let mut frontier = Frontier::empty(Discipline::Fifo);
        let mut visited = BTreeSet::from(["s".to_string()]);
        assert_eq!(frontier.expand(&graph, &start_entry(), &mut visited), 3);
        assert_eq!(frontier.nodes(), ["a", "b", "c"]);
        assert_eq!(frontier.peek().map(|e| e.node.as_str()), Some("a"));
    }

    #[test]
    fn test_lifo_puts_first_successor_on_top() {
        let graph = fan();
        let mut frontier = Frontier::empty(Discipline::Lifo);
        let mut visited = BTreeSet::from(["s".to_string()]);
        frontier.expand(&graph, &start_entry(), &mut visited);
        assert_eq!(frontier.nodes(), ["c", "b", "a"]);
        let top = frontier.pop().unwrap();
        assert_eq!(top.node, "a");
        assert_eq!(top.path, ["s", "a"]);
    }

    #[test]
    fn test_expand_skips_visited() {
        let graph = fan();
        let mut frontier = Frontier::empty(Discipline::Fifo);
        let mut visited = BTreeSet::from(["s".to_string(), "b".to_string()]);
        assert_eq!(frontier.expand(&graph, &start_entry(), &mut visited), 2);
        assert_eq!(frontier.nodes(), ["a", "c"]);
        assert_eq!(visited.len(), 4);
    }

    #[test]
    fn test_seeded() {
        let mut frontier = Frontier::seeded(Discipline::Lifo, "x");
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop().unwrap().path, ["x"]);
        assert!(frontier.is_empty());
        assert!(frontier.pop().is_none());
    }
}
