//! Member introspection
//!
//! Rust has no runtime reflection, so every type that can be walked implements
//! [`Inspect`]. The walker only ever sees `&dyn Inspect` and asks it for a
//! [`Shape`]:
//!
//! - [`Shape::Null`]: absent value (`None`, a dangling `Weak`)
//! - [`Shape::Scalar`]: rendered text, inlined into the owner's record
//! - [`Shape::Container`]: ordered or keyed [`Element`]s
//! - [`Shape::Composite`]: named [`Member`]s in declaration order
//!
//! # Registration
//!
//! Record-like types register their member table with [`inspect_struct!`];
//! enums with value semantics use [`inspect_scalar!`]. Types with computed or
//! unreadable members implement the trait by hand.
//!
//! ```
//! use objgraph::inspect_struct;
//! use objgraph::inspect::Inspect;
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//! inspect_struct!(Point { x, y });
//!
//! struct Pair<T> {
//!     left: T,
//!     right: T,
//! }
//! inspect_struct!(impl [T: Inspect] Pair<T> { left, right });
//! ```
//!
//! # Wrappers
//!
//! `Option`, `Box`, `Rc`, `Arc`, `Weak`, `RefCell` and `&T` are transparent:
//! they forward shape, type name and [`Identity`] to the value they hold, so the
//! same object reached through different wrappers is recognised as one node.
//!
//! [`inspect_struct!`]: crate::inspect_struct
//! [`inspect_scalar!`]: crate::inspect_scalar

mod impls;

use std::borrow::Cow;

use crate::errors::AccessError;

/// A value the graph walker can look into
pub trait Inspect {
    /// Short type name shown in the node header
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Owned(short_type_name(std::any::type_name::<Self>()))
    }

    /// Object identity used for cycle and shared-reference detection
    fn identity(&self) -> Identity {
        Identity::of(self)
    }

    /// Call `visit` exactly once with this value's shape.
    ///
    /// The callback form lets values behind a `RefCell` be described while
    /// the borrow guard is alive.
    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError>;

    /// Classify this value without keeping its shape
    fn probe(&self) -> Result<Probe, AccessError> {
        let mut probe = None;
        self.inspect(&mut |shape: Shape<'_>| probe = Some(Probe::of(&shape)))?;
        probe.ok_or_else(|| AccessError::new(format!("{} produced no shape", self.type_name())))
    }
}

/// What a value looks like to the walker
pub enum Shape<'a> {
    Null,
    Scalar(String),
    Container(Vec<Element<'a>>),
    Composite(Vec<Member<'a>>),
}

/// Classification plus the little data phase 1 of a visit needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    Null,
    Scalar(String),
    /// Element count
    Container(usize),
    Composite,
}

impl Probe {
    pub fn of(shape: &Shape<'_>) -> Self {
        match shape {
            Shape::Null => Probe::Null,
            Shape::Scalar(text) => Probe::Scalar(text.clone()),
            Shape::Container(elements) => Probe::Container(elements.len()),
            Shape::Composite(_) => Probe::Composite,
        }
    }
}

/// One entry of a container. Keyed containers set `key`.
pub struct Element<'a> {
    pub key: Option<&'a dyn Inspect>,
    pub value: &'a dyn Inspect,
}

impl<'a> Element<'a> {
    pub fn item(value: &'a dyn Inspect) -> Self {
        Element { key: None, value }
    }

    pub fn entry(key: &'a dyn Inspect, value: &'a dyn Inspect) -> Self {
        Element {
            key: Some(key),
            value,
        }
    }
}

/// A named member of a composite
pub struct Member<'a> {
    name: Cow<'a, str>,
    slot: Slot<'a>,
}

enum Slot<'a> {
    Value(&'a dyn Inspect),
    Unreadable(String),
    Behavior,
}

impl<'a> Member<'a> {
    /// A readable data member
    pub fn new(name: impl Into<Cow<'a, str>>, value: &'a dyn Inspect) -> Self {
        Member {
            name: name.into(),
            slot: Slot::Value(value),
        }
    }

    /// A member whose getter cannot be invoked (indexed accessors, failing
    /// computed members). The walker skips it and records a diagnostic.
    pub fn unreadable(name: impl Into<Cow<'a, str>>, reason: impl Into<String>) -> Self {
        Member {
            name: name.into(),
            slot: Slot::Unreadable(reason.into()),
        }
    }

    /// Callable behavior rather than data. Ignored by the walker.
    pub fn behavior(name: impl Into<Cow<'a, str>>) -> Self {
        Member {
            name: name.into(),
            slot: Slot::Behavior,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_behavior(&self) -> bool {
        matches!(self.slot, Slot::Behavior)
    }

    /// Read the member's value
    pub fn read(&self) -> Result<&'a dyn Inspect, AccessError> {
        match &self.slot {
            Slot::Value(value) => Ok(*value),
            Slot::Unreadable(reason) => Err(AccessError::new(reason.clone())),
            Slot::Behavior => Err(AccessError::new(format!(
                "'{}' is behavior, not data",
                self.name
            ))),
        }
    }
}

/// Object identity: address plus the concrete type at that address.
///
/// The type tag keeps a struct and its first field apart even though they
/// share an address. Distinct zero-sized values of the same type may also
/// share an address, in which case they are reported as a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    address: usize,
    type_tag: &'static str,
}

impl Identity {
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Identity {
            address: value as *const T as *const () as usize,
            type_tag: std::any::type_name::<T>(),
        }
    }
}

/// Strip module paths from a type name, keeping generic arguments:
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    fn flush(out: &mut String, token: &str) {
        out.push_str(token.rsplit("::").next().unwrap_or(token));
    }

    let mut out = String::with_capacity(full.len());
    let mut token = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            token.push(c);
        } else {
            flush(&mut out, &token);
            token.clear();
            out.push(c);
        }
    }
    flush(&mut out, &token);
    out
}

/// Register a record-like type by listing its fields in declaration order.
///
/// Generic types put their impl generics in brackets:
/// `inspect_struct!(impl [T: Inspect] Node<T> { value, next });`
#[macro_export]
macro_rules! inspect_struct {
    (impl [$($generics:tt)*] $ty:ty { $($field:ident),* $(,)? }) => {
        impl<$($generics)*> $crate::inspect::Inspect for $ty {
            fn inspect(
                &self,
                visit: &mut dyn FnMut($crate::inspect::Shape<'_>),
            ) -> ::std::result::Result<(), $crate::errors::AccessError> {
                visit($crate::inspect::Shape::Composite(::std::vec![
                    $($crate::inspect::Member::new(::std::stringify!($field), &self.$field)),*
                ]));
                ::std::result::Result::Ok(())
            }
        }
    };
    ($ty:ty { $($field:ident),* $(,)? }) => {
        $crate::inspect_struct!(impl [] $ty { $($field),* });
    };
}

/// Register value-semantic types (typically field-less enums) as scalars
/// rendered with their `Debug` output.
#[macro_export]
macro_rules! inspect_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::inspect::Inspect for $ty {
                fn inspect(
                    &self,
                    visit: &mut dyn FnMut($crate::inspect::Shape<'_>),
                ) -> ::std::result::Result<(), $crate::errors::AccessError> {
                    visit($crate::inspect::Shape::Scalar(::std::format!("{:?}", self)));
                    ::std::result::Result::Ok(())
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Point {
        x: i32,
        y: i32,
    }
    inspect_struct!(Point { x, y });

    #[derive(Debug)]
    enum Color {
        Red,
    }
    inspect_scalar!(Color);

    #[test]
    fn test_short_type_name_strips_paths() {
        assert_eq!(
            short_type_name("alloc::vec::Vec<alloc::string::String>"),
            "Vec<String>"
        );
        assert_eq!(
            short_type_name("std::collections::hash::map::HashMap<i32, a::b::Node<u8>>"),
            "HashMap<i32, Node<u8>>"
        );
        assert_eq!(short_type_name("i32"), "i32");
        assert_eq!(short_type_name("&[u8; 4]"), "&[u8; 4]");
    }

    #[test]
    fn test_probe_classifies_runtime_value() {
        let none: Option<Box<Point>> = None;
        let some = Some(Box::new(Point { x: 1, y: 2 }));
        let text = String::from("hello");
        let list = vec![1, 2, 3];

        assert_eq!(none.probe(), Ok(Probe::Null));
        assert_eq!(some.probe(), Ok(Probe::Composite));
        assert_eq!(text.probe(), Ok(Probe::Scalar("hello".to_string())));
        assert_eq!(list.probe(), Ok(Probe::Container(3)));
        assert_eq!(Color::Red.probe(), Ok(Probe::Scalar("Red".to_string())));
    }

    #[test]
    fn test_struct_members_in_declaration_order() {
        let p = Point { x: 3, y: 4 };
        let mut names = Vec::new();
        p.inspect(&mut |shape: Shape<'_>| {
            if let Shape::Composite(members) = shape {
                names = members.iter().map(|m| m.name().to_string()).collect();
            }
        })
        .expect("inspect failed");
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn test_wrappers_forward_identity_and_type_name() {
        let shared = Rc::new(Point { x: 0, y: 0 });
        let boxed: Option<Rc<Point>> = Some(Rc::clone(&shared));
        let cell = RefCell::new(Some(Rc::clone(&shared)));

        assert_eq!(shared.identity(), boxed.identity());
        assert_eq!(shared.identity(), cell.identity());
        assert_eq!(boxed.type_name(), "Point");
        assert_eq!(cell.type_name(), "Point");
    }

    #[test]
    fn test_equal_values_have_distinct_identity() {
        let a = Point { x: 1, y: 1 };
        let b = Point { x: 1, y: 1 };
        assert_ne!(a.identity(), b.identity());
    }

    struct Marker;
    inspect_struct!(Marker {});

    #[test]
    fn test_boxed_zero_sized_values_share_identity() {
        let a = Box::new(Marker);
        let b = Box::new(Marker);
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn test_mutably_borrowed_cell_is_unreadable() {
        let cell = RefCell::new(Point { x: 1, y: 2 });
        let _guard = cell.borrow_mut();
        assert!(cell.probe().is_err());
    }

    #[test]
    fn test_unreadable_member_reports_reason() {
        let member = Member::unreadable("item", "indexed member");
        assert_eq!(member.read().err(), Some(AccessError::new("indexed member")));
        assert!(Member::behavior("reset").is_behavior());
    }
}
