use logic_canvas_core::{
    evaluate_all, AtomDraft, AtomPatch, CanvasConfig, CanvasContext, LogicalConnector,
    MoleculeDraft, MoleculePatch, Node, NodeId,
};
use std::cell::RefCell;
use std::rc::Rc;

fn seeded() -> (CanvasContext, NodeId, NodeId) {
    let context = CanvasContext::new(CanvasConfig::sequential());
    let a1 = context
        .atoms()
        .add(AtomDraft::new("P", "it rains").with_truth_value(true));
    let a2 = context.atoms().add(AtomDraft::new("Q", "streets are dry"));
    (context, a1, a2)
}

#[test]
fn evaluated_view_tracks_atom_changes() {
    let (context, a1, a2) = seeded();
    let m = context.molecules().add(MoleculeDraft::new(
        vec![a1.clone(), a2.clone()],
        LogicalConnector::Implies,
    ));

    let evaluated = context.evaluated_molecules();
    assert_eq!(evaluated.get()[0].id, m);
    assert!(!evaluated.get()[0].truth_value);

    context.atoms().update(&a2, AtomPatch::truth_value(true));
    assert!(evaluated.get()[0].truth_value);

    context.atoms().update(&a1, AtomPatch::truth_value(false));
    context.atoms().update(&a2, AtomPatch::truth_value(false));
    assert!(evaluated.get()[0].truth_value);
}

#[test]
fn evaluated_view_tracks_molecule_changes() {
    let (context, a1, a2) = seeded();
    let m = context
        .molecules()
        .add(MoleculeDraft::new(vec![a1, a2], LogicalConnector::And));
    assert!(!context.evaluated_molecules().get()[0].truth_value);

    context.molecules().update(
        &m,
        MoleculePatch {
            connector: Some(LogicalConnector::Or),
            ..MoleculePatch::default()
        },
    );

    assert!(context.evaluated_molecules().get()[0].truth_value);
}

#[test]
fn raw_molecule_truth_value_is_not_authoritative() {
    let (context, a1, _) = seeded();
    let m = context.molecules().add(MoleculeDraft {
        truth_value: true,
        ..MoleculeDraft::new(vec![a1], LogicalConnector::Not)
    });

    assert!(context.molecules().get(&m).unwrap().truth_value);
    assert!(!context.evaluated_molecules().get()[0].truth_value);
}

#[test]
fn deleting_referenced_atom_reads_as_false() {
    let (context, a1, _) = seeded();
    context
        .molecules()
        .add(MoleculeDraft::new(vec![a1.clone()], LogicalConnector::Not));
    assert!(!context.evaluated_molecules().get()[0].truth_value);

    context.atoms().remove(&a1);

    assert!(context.evaluated_molecules().get()[0].truth_value);
}

#[test]
fn evaluated_view_is_stable_without_mutation() {
    let (context, a1, a2) = seeded();
    context
        .molecules()
        .add(MoleculeDraft::new(vec![a1, a2], LogicalConnector::Or));

    let first = context.evaluated_molecules().get();
    let second = context.evaluated_molecules().get();

    assert_eq!(*first, *second);
    assert_eq!(context.evaluated_molecules().revision(), 3);
}

#[test]
fn evaluated_view_preserves_positions_and_ids() {
    let (context, a1, _) = seeded();
    let m = context.molecules().add(
        MoleculeDraft::new(vec![a1], LogicalConnector::And).at(12.0, 34.0),
    );
    context.molecules().update_position(&m, 56.0, 78.0);

    let evaluated = context.evaluated_molecules().get();
    assert_eq!(evaluated[0].id, m);
    assert_eq!((evaluated[0].x, evaluated[0].y), (56.0, 78.0));
}

#[test]
fn all_nodes_lists_atoms_then_molecules() {
    let (context, a1, a2) = seeded();
    let m = context
        .molecules()
        .add(MoleculeDraft::new(vec![a1.clone()], LogicalConnector::Not));
    let a3 = context.atoms().add(AtomDraft::new("R", "late atom"));

    let nodes = context.all_nodes().get();
    let ids: Vec<&NodeId> = nodes.iter().map(Node::id).collect();
    assert_eq!(ids, vec![&a1, &a2, &a3, &m]);
    assert!(nodes[..3].iter().all(Node::is_atom));
    assert!(nodes[3].is_molecule());

    context.reset_nodes();
    assert!(context.all_nodes().get().is_empty());
}

#[test]
fn view_subscribers_see_final_state_after_each_mutation() {
    let (context, a1, _) = seeded();
    context
        .molecules()
        .add(MoleculeDraft::new(vec![a1.clone()], LogicalConnector::And));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    context
        .evaluated_molecules()
        .subscribe(move |molecules| sink.borrow_mut().push(molecules[0].truth_value));

    context.atoms().update(&a1, AtomPatch::truth_value(false));
    context.atoms().update(&a1, AtomPatch::truth_value(true));

    assert_eq!(*seen.borrow(), vec![true, false, true]);
}

#[test]
fn selection_is_independent_of_node_reset() {
    let (context, a1, _) = seeded();
    context.selection().toggle(a1.clone());
    context.set_connector(LogicalConnector::Not);

    context.reset_nodes();

    assert!(context.selection().contains(&a1));
    assert_eq!(context.connector(), LogicalConnector::Not);
}

#[test]
fn subscriber_writing_an_atom_leaves_evaluated_view_current() {
    let context = Rc::new(CanvasContext::new(CanvasConfig::sequential()));
    let a1 = context.atoms().add(AtomDraft::new("P", "it rains"));
    context
        .molecules()
        .add(MoleculeDraft::new(vec![a1.clone()], LogicalConnector::Not));

    let writer = Rc::downgrade(&context);
    let target = a1.clone();
    context.evaluated_molecules().subscribe(move |molecules| {
        if !molecules[0].truth_value {
            if let Some(context) = writer.upgrade() {
                context.atoms().update(&target, AtomPatch::truth_value(false));
            }
        }
    });

    context.atoms().update(&a1, AtomPatch::truth_value(true));

    let atoms = context.atoms().snapshot();
    let molecules = context.molecules().snapshot();
    assert!(!atoms[0].truth_value);
    assert_eq!(
        *context.evaluated_molecules().get(),
        evaluate_all(&molecules, &atoms)
    );
    assert!(context.evaluated_molecules().get()[0].truth_value);
}

#[test]
fn views_agree_with_each_other_inside_subscribers() {
    let context = Rc::new(CanvasContext::new(CanvasConfig::sequential()));
    let a1 = context.atoms().add(AtomDraft::new("P", "it rains"));
    context
        .molecules()
        .add(MoleculeDraft::new(vec![a1.clone()], LogicalConnector::Not));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let reader = Rc::downgrade(&context);
    context.all_nodes().subscribe(move |nodes| {
        let atom_truth = nodes[0].as_atom().is_some_and(|atom| atom.truth_value);
        if let Some(context) = reader.upgrade() {
            let molecule_truth = context.evaluated_molecules().get()[0].truth_value;
            sink.borrow_mut().push((atom_truth, molecule_truth));
        }
    });

    context.atoms().update(&a1, AtomPatch::truth_value(true));

    assert_eq!(*seen.borrow(), vec![(false, true), (true, false)]);
}
