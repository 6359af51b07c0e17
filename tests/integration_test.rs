// Integration tests for the object graph walker

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;

use objgraph::constants::DEFAULT_MAX_DEPTH;
use objgraph::errors::Limit;
use objgraph::graph::{Address, EdgeRecord, NodeRecord};
use objgraph::inspect::{Member, Shape};
use objgraph::samples::linked_list::DoublyLinkedList;
use objgraph::{inspect_scalar, inspect_struct};
use objgraph::{visualize, AccessError, Config, Inspect, VisualizeError};

struct Node {
    name: String,
    next: RefCell<Option<Rc<Node>>>,
}

inspect_struct!(Node { name, next });

fn node(name: &str) -> Rc<Node> {
    Rc::new(Node {
        name: name.to_string(),
        next: RefCell::new(None),
    })
}

fn link(from: &Rc<Node>, to: &Rc<Node>) {
    *from.next.borrow_mut() = Some(Rc::clone(to));
}

fn unlink(node: &Rc<Node>) {
    node.next.borrow_mut().take();
}

fn field_texts(record: &NodeRecord) -> Vec<String> {
    record.fields().iter().map(|f| f.text()).collect()
}

fn edge(from: (usize, usize), to: usize) -> EdgeRecord {
    EdgeRecord::new(Address::port(from.0, from.1), Address::node(to))
}

#[test]
fn test_self_reference_becomes_self_edge() {
    let a = node("a");
    link(&a, &a);

    let vis = visualize(&a, &Config::new()).expect("walk failed");

    assert_eq!(vis.nodes().len(), 1);
    assert_eq!(vis.edges(), &[edge((0, 2), 0)]);
    unlink(&a);
}

#[test]
fn test_two_node_ring() {
    let a = node("a");
    let b = node("b");
    link(&a, &b);
    link(&b, &a);

    let vis = visualize(&a, &Config::new().whitelist(["name"])).expect("walk failed");

    assert_eq!(vis.nodes().len(), 2);
    assert_eq!(vis.edges(), &[edge((0, 2), 1), edge((1, 2), 0)]);
    assert_eq!(field_texts(&vis.nodes()[0]), vec!["Node", "name: a", "next"]);
    assert_eq!(field_texts(&vis.nodes()[1]), vec!["Node", "name: b", "next"]);
    unlink(&a);
}

#[test]
fn test_long_cycle_visits_every_node_once() {
    let nodes: Vec<Rc<Node>> = (0..50).map(|i| node(&format!("n{}", i))).collect();
    for i in 0..nodes.len() {
        link(&nodes[i], &nodes[(i + 1) % nodes.len()]);
    }

    let vis = visualize(&nodes[0], &Config::new()).expect("walk failed");

    assert_eq!(vis.nodes().len(), 50);
    assert_eq!(vis.edges().len(), 50);
    assert_eq!(vis.edges().last(), Some(&edge((49, 2), 0)));
    unlink(&nodes[0]);
}

struct Leaf {
    value: i32,
}

struct Shared {
    a: Rc<Leaf>,
    b: Rc<Leaf>,
}

inspect_struct!(Leaf { value });
inspect_struct!(Shared { a, b });

#[test]
fn test_shared_reference_gets_one_node() {
    let leaf = Rc::new(Leaf { value: 3 });
    let root = Shared {
        a: Rc::clone(&leaf),
        b: Rc::clone(&leaf),
    };

    let vis = visualize(&root, &Config::new()).expect("walk failed");

    assert_eq!(vis.nodes().len(), 2);
    assert_eq!(vis.nodes()[1].type_name(), "Leaf");
    assert_eq!(vis.edges(), &[edge((0, 1), 1), edge((0, 2), 1)]);
}

#[test]
fn test_distinct_equal_values_stay_distinct() {
    let root = Shared {
        a: Rc::new(Leaf { value: 3 }),
        b: Rc::new(Leaf { value: 3 }),
    };

    let vis = visualize(&root, &Config::new()).expect("walk failed");

    assert_eq!(vis.nodes().len(), 3);
    assert_eq!(vis.edges(), &[edge((0, 1), 1), edge((0, 2), 2)]);
}

struct Cached {
    id: u32,
    cache: Box<Node>,
}

inspect_struct!(Cached { id, cache });

#[test]
fn test_blacklisted_member_is_not_walked() {
    let root = Cached {
        id: 9,
        cache: Box::new(Node {
            name: "hidden".to_string(),
            next: RefCell::new(None),
        }),
    };

    let vis = visualize(&root, &Config::new().blacklist(["cach"])).expect("walk failed");

    assert_eq!(vis.nodes().len(), 1);
    assert!(vis.edges().is_empty());
    assert_eq!(field_texts(&vis.nodes()[0]), vec!["Cached", "id"]);
}

#[test]
fn test_whitelist_beats_blacklist() {
    let root = Leaf { value: 42 };
    let config = Config::new().whitelist(["value"]).blacklist(["val"]);

    let vis = visualize(&root, &config).expect("walk failed");

    assert_eq!(field_texts(&vis.nodes()[0]), vec!["Leaf", "value: 42"]);
}

#[test]
fn test_scalar_value_hidden_without_whitelist() {
    let vis = visualize(&Leaf { value: 42 }, &Config::new()).expect("walk failed");
    assert_eq!(field_texts(&vis.nodes()[0]), vec!["Leaf", "value"]);
}

struct Bag {
    __backing: i32,
    _len: usize,
    label: &'static str,
}

inspect_struct!(Bag { __backing, _len, label });

#[test]
fn test_default_blacklist_hides_internals() {
    let root = Bag {
        __backing: 1,
        _len: 2,
        label: "x",
    };

    let vis = visualize(&root, &Config::new()).expect("walk failed");
    assert_eq!(field_texts(&vis.nodes()[0]), vec!["Bag", "label"]);

    let vis = visualize(&root, &Config::new().default_blacklist(false)).expect("walk failed");
    assert_eq!(
        field_texts(&vis.nodes()[0]),
        vec!["Bag", "__backing", "_len", "label"]
    );
}

struct Holder {
    items: Vec<i32>,
}

inspect_struct!(Holder { items });

#[test]
fn test_whitelisted_container_expands_inline() {
    let root = Holder {
        items: vec![1, 2, 3],
    };

    let vis = visualize(&root, &Config::new().whitelist(["items"])).expect("walk failed");

    assert_eq!(vis.nodes().len(), 2);
    assert_eq!(
        field_texts(&vis.nodes()[1]),
        vec!["Vec<i32>", "1", "2", "3"]
    );
    assert_eq!(vis.edges(), &[edge((0, 1), 1)]);
}

#[test]
fn test_container_is_summarized_by_default() {
    let root = Holder {
        items: vec![1, 2, 3],
    };

    let vis = visualize(&root, &Config::new()).expect("walk failed");

    assert_eq!(vis.nodes().len(), 2);
    assert_eq!(field_texts(&vis.nodes()[1]), vec!["Vec<i32>", "count: 3"]);

    let vis = visualize(&root, &Config::new().expand_containers(true)).expect("walk failed");
    assert_eq!(
        field_texts(&vis.nodes()[1]),
        vec!["Vec<i32>", "1", "2", "3"]
    );
}

#[test]
fn test_container_elements_get_their_own_nodes() {
    let first = Rc::new(Leaf { value: 1 });
    let root = vec![Rc::clone(&first), Rc::new(Leaf { value: 2 }), first];

    let vis = visualize(&root, &Config::new()).expect("walk failed");

    assert_eq!(vis.root_type(), "Vec<Rc<Leaf>>");
    assert_eq!(vis.nodes().len(), 3);
    assert_eq!(
        field_texts(&vis.nodes()[0]),
        vec!["Vec<Rc<Leaf>>", "[0]", "[1]", "[2]"]
    );
    assert_eq!(
        vis.edges(),
        &[edge((0, 1), 1), edge((0, 2), 2), edge((0, 3), 1)]
    );
}

struct Tree {
    value: i32,
    child: Option<Box<Tree>>,
}

inspect_struct!(Tree { value, child });

#[test]
fn test_null_member_is_marked() {
    let root = Tree {
        value: 1,
        child: None,
    };

    let vis = visualize(&root, &Config::new()).expect("walk failed");

    assert_eq!(vis.nodes().len(), 1);
    assert!(vis.edges().is_empty());
    assert_eq!(field_texts(&vis.nodes()[0]), vec!["Tree", "value", "child (∅)"]);
}

#[test]
fn test_absent_root_is_rejected() {
    let root: Option<Box<Tree>> = None;
    let result = visualize(&root, &Config::new());
    assert!(matches!(result, Err(VisualizeError::InvalidInput)));
}

#[test]
fn test_scalar_root_is_a_single_node() {
    let vis = visualize(&7_i64, &Config::new()).expect("walk failed");
    assert_eq!(vis.nodes().len(), 1);
    assert_eq!(field_texts(&vis.nodes()[0]), vec!["i64: 7"]);
}

struct Sensor {
    reading: i32,
}

impl Inspect for Sensor {
    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        visit(Shape::Composite(vec![
            Member::new("reading", &self.reading),
            Member::unreadable("calibration", "device offline"),
            Member::behavior("recalibrate"),
            Member::new("reading", &self.reading),
        ]));
        Ok(())
    }
}

#[test]
fn test_unreadable_member_is_skipped_with_diagnostic() {
    let root = Sensor { reading: 5 };

    let vis = visualize(&root, &Config::new().whitelist(["reading"])).expect("walk failed");

    assert_eq!(field_texts(&vis.nodes()[0]), vec!["Sensor", "reading: 5"]);
    assert_eq!(vis.diagnostics().len(), 1);
    assert_eq!(vis.diagnostics()[0].path, "root.calibration");
    assert_eq!(vis.diagnostics()[0].reason, "device offline");
}

struct Guarded {
    id: u8,
    inner: RefCell<Leaf>,
}

inspect_struct!(Guarded { id, inner });

#[test]
fn test_borrowed_cell_is_reported_not_fatal() {
    let root = Guarded {
        id: 1,
        inner: RefCell::new(Leaf { value: 0 }),
    };
    let _guard = root.inner.borrow_mut();

    let vis = visualize(&root, &Config::new()).expect("walk failed");

    assert_eq!(vis.nodes().len(), 1);
    assert_eq!(field_texts(&vis.nodes()[0]), vec!["Guarded", "id"]);
    assert_eq!(vis.diagnostics().len(), 1);
    assert_eq!(vis.diagnostics()[0].path, "root.inner");
}

#[test]
fn test_borrowed_root_fails() {
    let root = RefCell::new(Leaf { value: 0 });
    let _guard = root.borrow_mut();
    let result = visualize(&root, &Config::new());
    assert!(matches!(result, Err(VisualizeError::RootAccess(_))));
}

#[test]
fn test_node_limit() {
    let nodes: Vec<Rc<Node>> = (0..10).map(|i| node(&format!("n{}", i))).collect();
    for pair in nodes.windows(2) {
        link(&pair[0], &pair[1]);
    }

    let result = visualize(&nodes[0], &Config::new().max_nodes(Some(3)));

    match result {
        Err(VisualizeError::LimitExceeded { limit, path }) => {
            assert_eq!(limit, Limit::Nodes(3));
            assert_eq!(path, "root.next.next.next");
        }
        other => panic!("expected node limit, got {:?}", other.map(|v| v.nodes().len())),
    }
}

#[test]
fn test_depth_limit() {
    let nodes: Vec<Rc<Node>> = (0..10).map(|i| node(&format!("n{}", i))).collect();
    for pair in nodes.windows(2) {
        link(&pair[0], &pair[1]);
    }

    let result = visualize(&nodes[0], &Config::new().max_depth(Some(2)));
    assert!(matches!(
        result,
        Err(VisualizeError::LimitExceeded {
            limit: Limit::Depth(2),
            ..
        })
    ));

    let vis = visualize(&nodes[0], &Config::new().max_depth(None)).expect("walk failed");
    assert_eq!(vis.nodes().len(), 10);
}

// Builds and walks a doubly linked list of `len` values on a thread with the
// default stack size. Returns the node count.
fn walk_list_on_spawned_thread(len: usize) -> Result<usize, VisualizeError> {
    thread::Builder::new()
        .name(format!("walk-{}", len))
        .spawn(move || {
            let mut list = DoublyLinkedList::new();
            for v in 0..len {
                list.push_back(v as i32);
            }
            visualize(&list, &Config::new()).map(|vis| vis.nodes().len())
        })
        .expect("spawn failed")
        .join()
        .expect("walker thread crashed")
}

#[test]
fn test_default_depth_fits_default_thread_stack() {
    let len = DEFAULT_MAX_DEPTH - 1;
    // list object plus one node per value
    assert_eq!(walk_list_on_spawned_thread(len).expect("walk failed"), len + 1);
}

#[test]
fn test_default_depth_reports_limit_instead_of_overflowing() {
    let result = walk_list_on_spawned_thread(DEFAULT_MAX_DEPTH + 1);
    match result {
        Err(VisualizeError::LimitExceeded { limit, path }) => {
            assert_eq!(limit, Limit::Depth(DEFAULT_MAX_DEPTH));
            assert!(path.starts_with("root.head.next"));
        }
        other => panic!("expected depth limit, got {:?}", other),
    }
}

#[derive(Debug)]
enum Color {
    Red,
}

struct Pixel {
    color: Color,
}

inspect_scalar!(Color);
inspect_struct!(Pixel { color });

#[test]
fn test_scalar_enum_renders_with_debug() {
    let root = Pixel { color: Color::Red };
    let vis = visualize(&root, &Config::new().whitelist(["color"])).expect("walk failed");
    assert_eq!(field_texts(&vis.nodes()[0]), vec!["Pixel", "color: Red"]);
}

struct Branch {
    id: u8,
    below: Rc<Leaf>,
}

struct Fork {
    left: Box<Branch>,
    right: Box<Branch>,
}

inspect_struct!(Branch { id, below });
inspect_struct!(Fork { left, right });

#[test]
fn test_parent_record_complete_before_children() {
    let shared = Rc::new(Leaf { value: 8 });
    let root = Fork {
        left: Box::new(Branch {
            id: 1,
            below: Rc::clone(&shared),
        }),
        right: Box::new(Branch {
            id: 2,
            below: shared,
        }),
    };

    let vis = visualize(&root, &Config::new()).expect("walk failed");

    assert!(vis.nodes().iter().all(|n| n.is_sealed()));
    let types: Vec<&str> = vis.nodes().iter().map(|n| n.type_name()).collect();
    assert_eq!(types, vec!["Fork", "Branch", "Leaf", "Branch"]);
    // Both members of the root are laid out before either child gets a node
    assert_eq!(field_texts(&vis.nodes()[0]), vec!["Fork", "left", "right"]);
    assert_eq!(field_texts(&vis.nodes()[1]), vec!["Branch", "id", "below"]);
    assert_eq!(field_texts(&vis.nodes()[3]), vec!["Branch", "id", "below"]);
    assert_eq!(
        vis.edges(),
        &[
            edge((0, 1), 1),
            edge((1, 2), 2),
            edge((0, 2), 3),
            edge((3, 2), 2),
        ]
    );
}
