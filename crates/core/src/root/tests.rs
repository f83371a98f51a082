use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Result;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{CompositionError, CompositionRoot};
use crate::logging::LoggerVersion;
use crate::slot::Slot;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0} collaborator unavailable")]
struct Unavailable(&'static str);

fn token(value: &'static str) -> impl Fn() -> Result<&'static str> {
    move || Ok(value)
}

fn counted(value: &'static str, calls: Rc<Cell<usize>>) -> impl Fn() -> Result<&'static str> {
    move || {
        calls.set(calls.get() + 1);
        Ok(value)
    }
}

fn recording(
    slot: Slot,
    failing: Slot,
    calls: Rc<RefCell<Vec<Slot>>>,
) -> impl Fn() -> Result<&'static str> {
    move || {
        calls.borrow_mut().push(slot);
        if slot == failing {
            return Err(Unavailable(slot.as_str()).into());
        }
        Ok(slot.as_str())
    }
}

fn sample_root() -> CompositionRoot<&'static str> {
    CompositionRoot::new(
        token("NAV"),
        token("MAIN"),
        LoggerVersion::V2,
        token("LOGV2"),
    )
}

#[test]
fn renders_three_children_in_fixed_order() {
    let tree = sample_root().render().unwrap();
    assert_eq!(tree.iter().count(), 3);
    assert_eq!(tree.into_fragments(), ["NAV", "MAIN", "LOGV2"]);
}

#[test]
fn rebinding_logger_changes_only_logging_fragment() {
    let root = sample_root();
    let before = root.render().unwrap();

    let root = root.rebind_logging(LoggerVersion::V1, token("LOGV1"));
    let after = root.render().unwrap();

    assert_eq!(root.logger_version(), LoggerVersion::V1);
    assert_eq!(after.into_fragments(), ["NAV", "MAIN", "LOGV1"]);
    assert_eq!(before.get(Slot::Navigation), &"NAV");
    assert_eq!(before.get(Slot::MainContent), &"MAIN");
}

#[test]
fn retired_logger_is_released_and_never_invoked() {
    let retired_calls = Rc::new(Cell::new(0));
    let root = CompositionRoot::new(
        token("NAV"),
        token("MAIN"),
        LoggerVersion::V1,
        counted("LOGV1", retired_calls.clone()),
    );
    root.render().unwrap();
    assert_eq!(retired_calls.get(), 1);

    let root = root.rebind_logging(LoggerVersion::V2, token("LOGV2"));
    assert_eq!(Rc::strong_count(&retired_calls), 1);

    for _ in 0..3 {
        root.render().unwrap();
    }
    assert_eq!(retired_calls.get(), 1);
}

#[test]
fn successive_renders_are_structurally_equal() {
    let root = sample_root();
    assert_eq!(root.render().unwrap(), root.render().unwrap());
}

#[rstest]
#[case(Slot::Navigation)]
#[case(Slot::MainContent)]
#[case(Slot::Logging)]
fn collaborator_failure_aborts_render(#[case] failing: Slot) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let root = CompositionRoot::new(
        recording(Slot::Navigation, failing, calls.clone()),
        recording(Slot::MainContent, failing, calls.clone()),
        LoggerVersion::V2,
        recording(Slot::Logging, failing, calls.clone()),
    );

    let err = root.render().unwrap_err();
    assert_eq!(
        err.downcast_ref::<Unavailable>(),
        Some(&Unavailable(failing.as_str()))
    );
    assert_eq!(*calls.borrow(), Slot::ORDER[..=failing.index()].to_vec());
}

#[test]
fn main_content_failure_surfaces_same_error() {
    let root = CompositionRoot::new(
        token("NAV"),
        || -> Result<&'static str> { Err(Unavailable("main_content").into()) },
        LoggerVersion::V2,
        token("LOGV2"),
    );
    let err = root.render().unwrap_err();
    assert_eq!(err.to_string(), "main_content collaborator unavailable");
}

#[test]
fn builder_requires_every_collaborator() {
    let err = CompositionRoot::<&'static str>::builder()
        .navigation(token("NAV"))
        .logging(LoggerVersion::V2, token("LOGV2"))
        .build()
        .err();
    assert_eq!(
        err,
        Some(CompositionError::MissingCollaborator(Slot::MainContent))
    );
}

#[test]
fn builder_keeps_last_logging_binding() {
    let root = CompositionRoot::builder()
        .navigation(token("NAV"))
        .main_content(token("MAIN"))
        .logging(LoggerVersion::V1, token("LOGV1"))
        .logging(LoggerVersion::V2, token("LOGV2"))
        .build()
        .unwrap();
    assert_eq!(root.logger_version(), LoggerVersion::V2);
    assert_eq!(root.render().unwrap().into_fragments(), ["NAV", "MAIN", "LOGV2"]);
}
