//! End-to-end document evaluation tests against the core library.

use calcbook_core::{Document, EntryContent, Value};

fn lines(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_numeric_chain() {
    let mut doc = Document::new();
    let results = doc.evaluate_document(&lines(&["2 + 3", "@1 * 2"]));
    assert_eq!(
        results[0].as_ref().unwrap().content,
        EntryContent::Value(Value::Real(5.0))
    );
    assert_eq!(
        results[1].as_ref().unwrap().content,
        EntryContent::Value(Value::Real(10.0))
    );
}

#[test]
fn test_round_trip_through_store() {
    // Evaluating e1 and then "@1" yields the same canonical value.
    for expr in ["1/3", "2**0.5", "pi*2", "complex(1, 2) * complex(1, -2)"] {
        let mut doc = Document::new();
        let results = doc.evaluate_document(&lines(&[expr, "@1"]));
        let first = results[0].as_ref().unwrap();
        let second = results[1].as_ref().unwrap();
        assert_eq!(
            first.display_text(),
            second.display_text(),
            "round trip failed for {}",
            expr
        );
    }
}

#[test]
fn test_solution_indices() {
    let mut doc = Document::new();
    let results = doc.evaluate_document(&lines(&[
        "solve(x^2 - 5*x + 6, x)",
        "@1.0 + @1.1",
    ]));
    assert_eq!(
        results[0].as_ref().unwrap().display_text(),
        "x[0] = 2, x[1] = 3"
    );
    assert_eq!(
        results[1].as_ref().unwrap().content,
        EntryContent::Value(Value::Real(5.0))
    );
}

#[test]
fn test_system_variable_order() {
    // Variable index 0 is x and 1 is y, by first-seen order.
    let mut doc = Document::new();
    let results = doc.evaluate_document(&lines(&["x,y:x+y=5,x-y=1", "@1.1.0"]));
    assert_eq!(results[0].as_ref().unwrap().display_text(), "x = 3; y = 2");
    assert_eq!(
        results[1].as_ref().unwrap().content,
        EntryContent::Value(Value::Real(2.0))
    );
}

#[test]
fn test_forward_reference_fails_without_breaking_later_lines() {
    let mut doc = Document::new();
    let results = doc.evaluate_document(&lines(&["1", "@3", "9"]));
    let second = results[1].as_ref().unwrap();
    assert!(second.is_error());
    assert_eq!(
        second.display_text(),
        "Error: reference error: line 3 has no usable result"
    );
    assert_eq!(results[2].as_ref().unwrap().display_text(), "9");
}

#[test]
fn test_blank_and_comment_lines_have_no_entry() {
    let mut doc = Document::new();
    let results = doc.evaluate_document(&lines(&["", "# budget", "1 + 1"]));
    assert!(results[0].is_none());
    assert!(results[1].is_none());
    assert!(doc.store.get(1).is_none());
    assert_eq!(doc.get(3, None, None), Some(Value::Real(2.0)));
}

#[test]
fn test_renumbering_keeps_results_attached() {
    let mut doc = Document::new();
    doc.evaluate_document(&lines(&["10", "20", "30"]));
    doc.on_lines_inserted(2, 2);
    assert_eq!(doc.get(1, None, None), Some(Value::Real(10.0)));
    assert_eq!(doc.get(4, None, None), Some(Value::Real(20.0)));
    assert_eq!(doc.get(5, None, None), Some(Value::Real(30.0)));
    doc.on_lines_deleted(1, 2);
    assert_eq!(doc.get(1, None, None), Some(Value::Real(10.0)));
    assert_eq!(doc.get(2, None, None), Some(Value::Real(20.0)));
    assert_eq!(doc.get(3, None, None), Some(Value::Real(30.0)));
}

#[test]
fn test_reevaluation_overwrites_entry() {
    let mut doc = Document::new();
    doc.evaluate_line(1, "2 + 2");
    doc.evaluate_line(1, "3 + 3");
    assert_eq!(doc.get(1, None, None), Some(Value::Real(6.0)));
}

#[test]
fn test_qalc_round_trip_preserves_results() {
    let dir = std::env::temp_dir().join("calcbook-doc-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("session.qalc");

    let texts = lines(&["solve(x^2 - 5*x + 6, x)", "@1.1 * 10"]);
    let mut doc = Document::new();
    doc.evaluate_document(&texts);
    doc.save_qalc(&path, &texts).unwrap();

    // Restore into a solver-less document: stored solutions are still
    // referenceable because nothing is re-evaluated.
    let mut restored = Document::without_solver();
    let restored_lines = restored.load_qalc(&path).unwrap();
    assert_eq!(restored_lines, texts);
    assert_eq!(restored.get(1, Some(1), None), Some(Value::Real(3.0)));
    assert_eq!(restored.get(2, None, None), Some(Value::Real(30.0)));

    std::fs::remove_file(&path).ok();
}
