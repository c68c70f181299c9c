//! The pattern building blocks working together.

use std::sync::Arc;
use switchyard::testing::{CountingCapability, FailingCapability, RecordingCapability};
use switchyard::{
    AccessDenied, Broadcast, Capability, Chain, Dispatcher, Prototypes, SharedPool, from_fn,
};

mod common;
use common::{SortAscending, sample};

#[derive(Clone, Debug, PartialEq)]
struct Request {
    user: &'static str,
    amount: u32,
}

#[test]
fn test_approval_chain() {
    let chain = Chain::new()
        .link(from_fn(|r: Request| Ok((r.amount < 100).then_some("clerk"))))
        .link(from_fn(|r: Request| Ok((r.amount < 10_000).then_some("manager"))))
        .link(from_fn(|r: Request| Ok((r.user == "ceo").then_some("board"))));

    let approve = |amount| chain.handle(Request { user: "ann", amount }).unwrap();

    assert_eq!(approve(50), Some("clerk"));
    assert_eq!(approve(5_000), Some("manager"));
    assert_eq!(approve(50_000), None);
    assert_eq!(
        chain.handle(Request { user: "ceo", amount: 50_000 }).unwrap(),
        Some("board")
    );
}

#[test]
fn test_guarded_dispatch() {
    let sorter = SortAscending.guard(|input: &Vec<i32>| {
        if input.len() > 100 {
            Err(AccessDenied::new("input too long"))
        } else {
            Ok(())
        }
    });
    let dispatcher = Dispatcher::new(sorter);

    assert_eq!(dispatcher.invoke(sample()).unwrap(), vec![3, 3, 5, 5, 6, 7, 8]);

    let err = dispatcher.invoke(vec![0; 101]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<AccessDenied>().map(AccessDenied::reason),
        Some("input too long")
    );
}

#[test]
fn test_broadcast_to_observers() {
    let audit = RecordingCapability::new();
    let counter = CountingCapability::new();

    let mut feed = Broadcast::new();
    let audit_id = feed.subscribe(audit.clone());
    feed.subscribe(counter.clone());

    assert_eq!(feed.notify(Request { user: "bo", amount: 3 }).unwrap(), 2);

    assert!(feed.unsubscribe(audit_id));
    assert_eq!(feed.notify(Request { user: "cy", amount: 4 }).unwrap(), 1);

    assert_eq!(audit.inputs(), vec![Request { user: "bo", amount: 3 }]);
    assert_eq!(counter.count(), 2);
}

#[test]
fn test_broadcast_stops_at_failing_observer() {
    let late = RecordingCapability::new();

    let mut feed = Broadcast::new();
    feed.subscribe(FailingCapability::new("disk full"));
    feed.subscribe(late.clone());

    let err = feed.notify(1u8).unwrap_err();
    assert_eq!(err.to_string(), "disk full");
    assert_eq!(late.count(), 0);
}

#[test]
fn test_prototypes_and_pool() {
    let mut prototypes = Prototypes::new();
    prototypes.register("default", sample());

    let mut copy = prototypes.spawn("default").unwrap();
    copy.push(1);
    assert_eq!(prototypes.spawn("default").unwrap(), sample());
    assert_eq!(prototypes.spawn("other").unwrap_err().key(), "other");

    let mut glyphs: SharedPool<char, String> = SharedPool::new();
    let a = glyphs.get_or_insert_with('a', || "glyph-a".to_owned());
    let again = glyphs.get_or_insert_with('a', || unreachable!());
    assert!(Arc::ptr_eq(&a, &again));
    assert_eq!(glyphs.len(), 1);
}
