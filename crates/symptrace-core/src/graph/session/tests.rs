use crate::error::SymptraceError;
use crate::graph::builtin::{otitis_graph, OTITIS};
use crate::graph::session::*;
use crate::graph::types::Algorithm;
use crate::graph::{GraphModel, TraversalEngine};

fn strings(nodes: &[&str]) -> Vec<String> {
    nodes.iter().map(|s| s.to_string()).collect()
}

fn diamond() -> GraphModel {
    GraphModel::new("TARGET")
        .with_edges("A", ["B", "C"])
        .with_edges("B", ["D"])
        .with_edges("C", ["D"])
        .with_edges("D", ["TARGET"])
        .with_edges("TARGET", Vec::<String>::new())
}

fn candidate(prompt: Prompt) -> String {
    match prompt {
        Prompt::Ask(entry) => entry.node,
        Prompt::Diagnosed(path) => panic!("unexpected diagnosis: {path:?}"),
    }
}

/// Answer "yes" to every question until the session concludes
fn drive_all_yes(session: &mut InteractiveSession<'_>) {
    while !session.is_terminal() {
        match session.peek_next().unwrap() {
            Prompt::Ask(_) => {
                session.answer(true).unwrap();
            }
            Prompt::Diagnosed(_) => break,
        }
    }
}

#[test]
fn test_initial_state() {
    let graph = diamond();
    let session = InteractiveSession::new(&graph, Algorithm::Bfs, "A");
    assert_eq!(session.state(), SessionState::AwaitingAnswer);
    assert_eq!(session.frontier_nodes(), strings(&["A"]));
    assert!(session.accumulated_path().is_empty());
    assert_eq!(session.questions_asked(), 0);
}

#[test]
fn test_invalid_start_is_not_found_immediately() {
    let graph = diamond();
    for start in ["", "nope"] {
        let mut session = InteractiveSession::new(&graph, Algorithm::Dfs, start);
        assert_eq!(session.state(), SessionState::NotFound);
        assert!(session.visited().is_empty());
        assert!(matches!(
            session.peek_next(),
            Err(SymptraceError::SessionFinished {
                outcome: SessionState::NotFound
            })
        ));
    }
}

#[test]
fn test_peek_does_not_mutate() {
    let graph = diamond();
    let mut session = InteractiveSession::new(&graph, Algorithm::Bfs, "A");
    assert_eq!(candidate(session.peek_next().unwrap()), "A");
    assert_eq!(candidate(session.peek_next().unwrap()), "A");
    assert_eq!(session.questions_asked(), 0);
    assert_eq!(session.frontier_nodes(), strings(&["A"]));
}

#[test]
fn test_all_yes_matches_full_run() {
    let graph = otitis_graph();
    let engine = TraversalEngine::new(&graph);
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        for start in graph.all_symptom_nodes() {
            let run = engine.run(algorithm, &start);
            let mut session = InteractiveSession::new(&graph, algorithm, &start);
            drive_all_yes(&mut session);
            assert_eq!(session.state(), SessionState::Found);
            assert_eq!(session.accumulated_path(), run.final_path.as_slice());
            assert_eq!(session.visited().len(), run.visited_count);
            // Every step but the target's is a question
            assert_eq!(session.questions_asked(), run.step_count() - 1);
        }
    }
}

#[test]
fn test_no_discards_candidate_without_expanding() {
    let graph = diamond();
    let mut session = InteractiveSession::new(&graph, Algorithm::Bfs, "A");
    session.peek_next().unwrap();
    assert_eq!(session.answer(true).unwrap(), SessionState::AwaitingAnswer);
    assert_eq!(session.frontier_nodes(), strings(&["B", "C"]));

    assert_eq!(candidate(session.peek_next().unwrap()), "B");
    assert_eq!(session.answer(false).unwrap(), SessionState::AwaitingAnswer);
    assert_eq!(session.frontier_nodes(), strings(&["C"]));
    assert!(session.visited().contains("B"));
    assert_eq!(session.accumulated_path(), strings(&["A"]).as_slice());

    assert_eq!(candidate(session.peek_next().unwrap()), "C");
    session.answer(true).unwrap();
    assert_eq!(candidate(session.peek_next().unwrap()), "D");
    session.answer(true).unwrap();

    match session.peek_next().unwrap() {
        Prompt::Diagnosed(path) => assert_eq!(path, strings(&["A", "C", "D", "TARGET"])),
        other => panic!("expected diagnosis, got {other:?}"),
    }
    assert_eq!(session.state(), SessionState::Found);
    assert_eq!(session.questions_asked(), 4);
}

#[test]
fn test_all_no_ends_not_found() {
    let graph = diamond();
    let mut session = InteractiveSession::new(&graph, Algorithm::Dfs, "A");
    session.peek_next().unwrap();
    assert_eq!(session.answer(false).unwrap(), SessionState::NotFound);
    assert_eq!(session.questions_asked(), 1);

    let summary = session.summary();
    assert!(!summary.found);
    assert!(summary.final_path.is_empty());
    assert_eq!(summary.probability, 0.0);
}

#[test]
fn test_terminal_session_rejects_input() {
    let graph = diamond();
    let mut session = InteractiveSession::new(&graph, Algorithm::Bfs, "TARGET");
    assert!(matches!(
        session.peek_next().unwrap(),
        Prompt::Diagnosed(ref path) if *path == strings(&["TARGET"])
    ));
    assert!(matches!(
        session.peek_next(),
        Err(SymptraceError::SessionFinished {
            outcome: SessionState::Found
        })
    ));
    assert!(matches!(
        session.answer(true),
        Err(SymptraceError::SessionFinished { .. })
    ));
    assert_eq!(session.questions_asked(), 0);
}

#[test]
fn test_answer_without_peek_on_target_concludes() {
    let graph = GraphModel::new("T").with_edges("a", ["T"]);
    let mut session = InteractiveSession::new(&graph, Algorithm::Dfs, "a");
    session.answer(true).unwrap();
    assert_eq!(session.answer(false).unwrap(), SessionState::Found);
    assert_eq!(session.accumulated_path(), strings(&["a", "T"]).as_slice());
    assert_eq!(session.questions_asked(), 1);
}

#[test]
fn test_dfs_session_asks_first_successor_first() {
    let graph = otitis_graph();
    let mut session = InteractiveSession::new(&graph, Algorithm::Dfs, "dolor_oido");
    session.answer(true).unwrap();
    assert_eq!(candidate(session.peek_next().unwrap()), "presion_oido");
    session.answer(false).unwrap();
    assert_eq!(candidate(session.peek_next().unwrap()), "dolor_punzante");
    session.answer(true).unwrap();
    // dolor_punzante -> [secrecion, OTITIS]: secrecion is on top
    assert_eq!(candidate(session.peek_next().unwrap()), "secrecion");
    session.answer(false).unwrap();
    assert!(matches!(session.peek_next().unwrap(), Prompt::Diagnosed(_)));
    assert_eq!(
        session.summary().final_path,
        strings(&["dolor_oido", "dolor_punzante", OTITIS])
    );
}

#[test]
fn test_view_reports_candidate_and_frontier() {
    let graph = diamond();
    let mut session = InteractiveSession::new(&graph, Algorithm::Bfs, "A");
    session.answer(true).unwrap();
    let view = session.view();
    assert_eq!(view.state, SessionState::AwaitingAnswer);
    assert_eq!(view.candidate.as_deref(), Some("B"));
    assert_eq!(view.frontier, strings(&["B", "C"]));
    assert_eq!(view.visited.len(), 3);
    assert_eq!(view.questions_asked, 1);

    session.answer(false).unwrap();
    session.answer(false).unwrap();
    let view = session.view();
    assert_eq!(view.state, SessionState::NotFound);
    assert!(view.candidate.is_none());
}

/// a -> b -> c with back edges to every earlier node
fn cycle(target_after_c: bool) -> GraphModel {
    let c_successors: Vec<&str> = if target_after_c {
        vec!["a", "b", "T"]
    } else {
        vec!["a", "b"]
    };
    GraphModel::new("T")
        .with_edges("a", ["b"])
        .with_edges("b", ["c", "a"])
        .with_edges("c", c_successors)
}

/// Answer "yes" throughout, returning the candidates in the order asked
fn asked_all_yes(session: &mut InteractiveSession<'_>) -> Vec<String> {
    let mut asked = Vec::new();
    while !session.is_terminal() {
        match session.peek_next().unwrap() {
            Prompt::Ask(entry) => {
                asked.push(entry.node);
                session.answer(true).unwrap();
            }
            Prompt::Diagnosed(_) => break,
        }
    }
    asked
}

#[test]
fn test_cycles_ask_each_node_once() {
    let graph = cycle(false);
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let mut session = InteractiveSession::new(&graph, algorithm, "a");
        let asked = asked_all_yes(&mut session);

        assert_eq!(asked, strings(&["a", "b", "c"]), "{algorithm}");
        assert_eq!(session.state(), SessionState::NotFound);
        assert_eq!(session.questions_asked(), 3);
        assert_eq!(session.visited().len(), 3);
        assert!(session.frontier_nodes().is_empty());
    }
}

#[test]
fn test_cycles_with_target_match_full_run() {
    let graph = cycle(true);
    let engine = TraversalEngine::new(&graph);
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        for start in ["a", "b", "c"] {
            let run = engine.run(algorithm, start);
            let mut session = InteractiveSession::new(&graph, algorithm, start);
            let asked = asked_all_yes(&mut session);

            let mut unique = asked.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), asked.len(), "{algorithm} from {start}");

            assert_eq!(session.state(), SessionState::Found);
            assert_eq!(session.accumulated_path(), run.final_path.as_slice());
            assert_eq!(session.visited().len(), run.visited_count);
            assert_eq!(asked.len(), run.step_count() - 1);
        }
    }
}
