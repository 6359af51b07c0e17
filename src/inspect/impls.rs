//! [`Inspect`] implementations for std types

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::{Rc, Weak as RcWeak};
use std::sync::{Arc, Weak as ArcWeak};

use super::{short_type_name, Element, Identity, Inspect, Shape};
use crate::errors::AccessError;

macro_rules! display_scalars {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
                    visit(Shape::Scalar(self.to_string()));
                    Ok(())
                }
            }
        )+
    };
}

display_scalars!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

// Box, Rc, Arc and references are transparent
macro_rules! forwarding_pointers {
    ($($ptr:ident),+) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ptr<T> {
                fn type_name(&self) -> Cow<'static, str> {
                    (**self).type_name()
                }

                fn identity(&self) -> Identity {
                    (**self).identity()
                }

                fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
                    (**self).inspect(visit)
                }
            }
        )+
    };
}

forwarding_pointers!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &T {
    fn type_name(&self) -> Cow<'static, str> {
        (**self).type_name()
    }

    fn identity(&self) -> Identity {
        (**self).identity()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        (**self).inspect(visit)
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn type_name(&self) -> Cow<'static, str> {
        match self {
            Some(value) => value.type_name(),
            None => Cow::Owned(short_type_name(std::any::type_name::<T>())),
        }
    }

    fn identity(&self) -> Identity {
        match self {
            Some(value) => value.identity(),
            None => Identity::of(self),
        }
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        match self {
            Some(value) => value.inspect(visit),
            None => {
                visit(Shape::Null);
                Ok(())
            }
        }
    }
}

// A dangling weak pointer is Null
macro_rules! forwarding_weak {
    ($($weak:ident),+) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $weak<T> {
                fn type_name(&self) -> Cow<'static, str> {
                    match self.upgrade() {
                        Some(strong) => strong.type_name(),
                        None => Cow::Owned(short_type_name(std::any::type_name::<T>())),
                    }
                }

                fn identity(&self) -> Identity {
                    match self.upgrade() {
                        Some(strong) => strong.identity(),
                        None => Identity::of(self),
                    }
                }

                fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
                    match self.upgrade() {
                        Some(strong) => strong.inspect(visit),
                        None => {
                            visit(Shape::Null);
                            Ok(())
                        }
                    }
                }
            }
        )+
    };
}

forwarding_weak!(RcWeak, ArcWeak);

impl<T: Inspect + ?Sized> Inspect for RefCell<T> {
    fn type_name(&self) -> Cow<'static, str> {
        match self.try_borrow() {
            Ok(inner) => inner.type_name(),
            Err(_) => Cow::Owned(short_type_name(std::any::type_name::<T>())),
        }
    }

    // The address inside the cell is stable, so it is safe to keep after the
    // guard is dropped.
    fn identity(&self) -> Identity {
        match self.try_borrow() {
            Ok(inner) => inner.identity(),
            Err(_) => Identity::of(self),
        }
    }

    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        let inner = self.try_borrow().map_err(|e| {
            AccessError::new(format!(
                "{} is mutably borrowed: {}",
                short_type_name(std::any::type_name::<T>()),
                e
            ))
        })?;
        inner.inspect(visit)
    }
}

fn sequence<'a, T: Inspect + 'a>(items: impl Iterator<Item = &'a T>) -> Shape<'a> {
    Shape::Container(items.map(|item| Element::item(item)).collect())
}

fn keyed<'a, K: Inspect + 'a, V: Inspect + 'a>(
    entries: impl Iterator<Item = (&'a K, &'a V)>,
) -> Shape<'a> {
    Shape::Container(entries.map(|(k, v)| Element::entry(k, v)).collect())
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        visit(sequence(self.iter()));
        Ok(())
    }
}

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        visit(sequence(self.iter()));
        Ok(())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        visit(sequence(self.iter()));
        Ok(())
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        visit(sequence(self.iter()));
        Ok(())
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        visit(sequence(self.iter()));
        Ok(())
    }
}

impl<T: Inspect, S> Inspect for HashSet<T, S> {
    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        visit(sequence(self.iter()));
        Ok(())
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        visit(keyed(self.iter()));
        Ok(())
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn inspect(&self, visit: &mut dyn FnMut(Shape<'_>)) -> Result<(), AccessError> {
        visit(keyed(self.iter()));
        Ok(())
    }
}
