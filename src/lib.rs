#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::vec::Vec;
use core::fmt;
use core::mem;

#[cfg(feature = "nonempty")]
use nonempty::NonEmpty;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub mod encoded;

pub use encoded::Encoded;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list that always holds at least one value.
///
/// Nodes are stored in a growable table placed in the allocator `A`, and
/// links between them are table indices. Slots left behind by removed nodes
/// are reused by later insertions.

#[derive(Clone)]
pub struct List<T, A: Allocator = Global> {
  slots: Vec<Slot<T>, A>,
  head: NodeRef,
  free: Option<NodeRef>,
}

/// An iterator over the values of a [`List`], in chain order.

pub struct Iter<'a, T> {
  slots: &'a [Slot<T>],
  cursor: Option<NodeRef>,
}

/// A consuming iterator over the values of a [`List`], in chain order.

pub struct IntoIter<T, A: Allocator = Global> {
  slots: Vec<Slot<T>, A>,
  cursor: Option<NodeRef>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

// A `NodeRef` is an index into the slot table and is always in bounds. The
// slots reachable from `head` are exactly the occupied ones, so following
// `next` links from `head` visits every live node once and terminates.

#[derive(Clone, Copy)]
struct NodeRef(usize);

#[derive(Clone)]
struct Node<T> {
  value: T,
  next: Option<NodeRef>,
}

#[derive(Clone)]
enum Slot<T> {
  Occupied(Node<T>),
  Vacant { next_free: Option<NodeRef> },
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T, A: Allocator> List<T, A> {
  #[inline(always)]
  fn node(&self, r: NodeRef) -> &Node<T> {
    let Slot::Occupied(node) = &self.slots[r.0] else { unreachable!() };
    node
  }

  #[inline(always)]
  fn node_mut(&mut self, r: NodeRef) -> &mut Node<T> {
    let Slot::Occupied(node) = &mut self.slots[r.0] else { unreachable!() };
    node
  }

  // Allocates a bare node. The new node is not chained to anything until a
  // `link` call names it.

  fn push_node(&mut self, value: T) -> NodeRef {
    let node = Node { value, next: None };
    match self.free {
      None => {
        let r = NodeRef(self.slots.len());
        self.slots.push(Slot::Occupied(node));
        r
      }
      Some(r) => {
        let Slot::Vacant { next_free } = self.slots[r.0] else { unreachable!() };
        self.free = next_free;
        self.slots[r.0] = Slot::Occupied(node);
        r
      }
    }
  }

  #[inline(always)]
  fn link(&mut self, r: NodeRef, next: Option<NodeRef>) {
    self.node_mut(r).next = next;
  }

  // Drops the node's value now and puts its slot on the free list.

  fn vacate(&mut self, r: NodeRef) {
    let next_free = self.free;
    self.free = Some(r);
    self.slots[r.0] = Slot::Vacant { next_free };
  }

  fn build_in<I>(first: T, rest: I, allocator: A) -> Self
  where
    I: IntoIterator<Item = T>,
  {
    let mut slots = Vec::new_in(allocator);
    slots.push(Slot::Occupied(Node { value: first, next: None }));
    let mut list = List { slots, head: NodeRef(0), free: None };
    let mut last = list.head;
    for value in rest {
      let node = list.push_node(value);
      list.link(last, Some(node));
      last = node;
    }
    list
  }
}

impl<T> List<T> {
  /// Builds a list holding the given values, in order, backed by the global
  /// allocator. Yields `None` when the sequence is empty.

  pub fn new<I>(values: I) -> Option<Self>
  where
    I: IntoIterator<Item = T>,
  {
    Self::new_in(values, Global)
  }
}

impl<T, A: Allocator> List<T, A> {
  /// Builds a list holding the given values, in order, backed by the given
  /// allocator. Yields `None` when the sequence is empty.

  pub fn new_in<I>(values: I, allocator: A) -> Option<Self>
  where
    I: IntoIterator<Item = T>,
  {
    let mut values = values.into_iter();
    let first = values.next()?;
    Some(Self::build_in(first, values, allocator))
  }

  /// A reference to the list's allocator.

  #[inline(always)]
  pub fn allocator(&self) -> &A {
    self.slots.allocator()
  }

  /// The first value.

  #[inline(always)]
  pub fn first(&self) -> &T {
    &self.node(self.head).value
  }

  /// The last value. Walks the whole chain.

  pub fn last(&self) -> &T {
    let mut r = self.head;
    while let Some(next) = self.node(r).next {
      r = next;
    }
    &self.node(r).value
  }

  /// The next-to-last value, or `None` if the list holds a single value.

  pub fn penultimate(&self) -> Option<&T> {
    let mut prev = None;
    let mut r = self.head;
    while let Some(next) = self.node(r).next {
      prev = Some(r);
      r = next;
    }
    prev.map(|r| &self.node(r).value)
  }

  /// The value at the given zero-based position, or `None` if the position
  /// is past the end.

  pub fn get(&self, index: usize) -> Option<&T> {
    let mut r = self.head;
    for _ in 0 .. index {
      r = self.node(r).next?;
    }
    Some(&self.node(r).value)
  }

  /// The number of values, which is at least 1. Walks the whole chain.

  pub fn len(&self) -> usize {
    let mut n = 1;
    let mut r = self.head;
    while let Some(next) = self.node(r).next {
      n = n + 1;
      r = next;
    }
    n
  }

  /// An iterator over the values, in chain order.

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter { slots: &self.slots, cursor: Some(self.head) }
  }

  /// A reversed copy. The list itself is unchanged.

  pub fn reversed(&self) -> Option<Self>
  where
    T: Clone,
    A: Clone,
  {
    let mut values = Vec::new_in(self.allocator().clone());
    for value in self.iter() {
      values.push(value.clone());
    }
    Self::new_in(values.into_iter().rev(), self.allocator().clone())
  }

  /// Reverses the list in place by relinking nodes. No values are moved,
  /// cloned, or dropped.

  pub fn reverse(&mut self) {
    let mut prev = self.head;
    let mut cursor = self.node(prev).next;
    self.link(prev, None);
    while let Some(r) = cursor {
      let next = self.node(r).next;
      self.link(r, Some(prev));
      prev = r;
      cursor = next;
    }
    self.head = prev;
  }

  /// Whether the values read the same forwards and backwards.

  pub fn is_palindrome(&self) -> bool
  where
    T: PartialEq + Clone,
    A: Clone,
  {
    let Some(reversed) = self.reversed() else { return false };
    self.iter().eq(reversed.iter())
  }

  /// Collapses every run of adjacent equal values to its first occurrence.
  /// Spliced-out values are dropped immediately.

  pub fn dedup(&mut self)
  where
    T: PartialEq,
  {
    let mut r = self.head;
    while let Some(next) = self.node(r).next {
      if self.node(r).value == self.node(next).value {
        let after = self.node(next).next;
        self.link(r, after);
        self.vacate(next);
      } else {
        r = next;
      }
    }
  }

  /// Groups the values into one inner list per maximal run of adjacent
  /// equal values. The list itself is unchanged.

  pub fn runs(&self) -> Option<List<List<T, A>, A>>
  where
    T: PartialEq + Clone,
    A: Clone,
  {
    let mut groups = Vec::new_in(self.allocator().clone());
    let mut cursor = Some(self.head);
    while let Some(r) = cursor {
      let first = &self.node(r).value;
      let mut count = 1;
      cursor = self.node(r).next;
      while let Some(s) = cursor {
        if self.node(s).value != *first {
          break;
        }
        count = count + 1;
        cursor = self.node(s).next;
      }
      let rest = core::iter::repeat(first.clone()).take(count - 1);
      groups.push(List::build_in(first.clone(), rest, self.allocator().clone()));
    }
    List::new_in(groups, self.allocator().clone())
  }

  /// Run-length codes the values, with one count-value [`Encoded::Run`] per
  /// maximal run of adjacent equal values. The list itself is unchanged.

  pub fn encoded(&self) -> Option<List<Encoded<T>, A>>
  where
    T: PartialEq + Clone,
    A: Clone,
  {
    let runs = self.runs()?;
    let mut elements = Vec::new_in(self.allocator().clone());
    for run in runs.iter() {
      elements.push(Encoded::Run(run.len(), run.first().clone()));
    }
    List::new_in(elements, self.allocator().clone())
  }

  /// Like [`encoded`](Self::encoded), except that a value with no adjacent
  /// equal neighbors stays a bare [`Encoded::Single`] instead of becoming a
  /// count-value pair.

  pub fn encoded_compact(&self) -> Option<List<Encoded<T>, A>>
  where
    T: PartialEq + Clone,
    A: Clone,
  {
    let runs = self.runs()?;
    let mut elements = Vec::new_in(self.allocator().clone());
    for run in runs.iter() {
      match run.len() {
        1 => elements.push(Encoded::Single(run.first().clone())),
        n => elements.push(Encoded::Run(n, run.first().clone())),
      }
    }
    List::new_in(elements, self.allocator().clone())
  }

  /// Chains one copy of each value directly after it.

  pub fn duplicate_each(&mut self)
  where
    T: Clone,
  {
    self.repeat_each(2)
  }

  /// Chains copies of each value directly after it, so that each original
  /// value appears `times` times in a row. A `times` of 0 or 1 leaves the
  /// list unchanged.

  pub fn repeat_each(&mut self, times: usize)
  where
    T: Clone,
  {
    if times <= 1 {
      return;
    }
    let mut cursor = Some(self.head);
    while let Some(r) = cursor {
      let saved = self.node(r).next;
      let mut last = r;
      for _ in 1 .. times {
        let value = self.node(r).value.clone();
        let copy = self.push_node(value);
        self.link(copy, saved);
        self.link(last, Some(copy));
        last = copy;
      }
      cursor = saved;
    }
  }

  /// Inserts the value at the given zero-based position. Position 0 makes
  /// the value the new first value, and a position equal to the length
  /// appends. A position past that leaves the list unchanged.

  pub fn insert(&mut self, index: usize, value: T) {
    if index == 0 {
      let head = self.head;
      let node = self.push_node(value);
      self.link(node, Some(head));
      self.head = node;
      return;
    }
    let mut r = self.head;
    for _ in 0 .. index - 1 {
      match self.node(r).next {
        None => return,
        Some(next) => r = next,
      }
    }
    let after = self.node(r).next;
    let node = self.push_node(value);
    self.link(node, after);
    self.link(r, Some(node));
  }

  /// Removes and drops the value at the given zero-based position. A
  /// position past the end leaves the list unchanged, as does removing
  /// position 0 when the list holds a single value.

  pub fn remove(&mut self, index: usize) {
    if index == 0 {
      let Some(next) = self.node(self.head).next else { return };
      let head = self.head;
      self.head = next;
      self.vacate(head);
      return;
    }
    let mut r = self.head;
    for _ in 0 .. index - 1 {
      match self.node(r).next {
        None => return,
        Some(next) => r = next,
      }
    }
    let Some(target) = self.node(r).next else { return };
    let after = self.node(target).next;
    self.link(r, after);
    self.vacate(target);
  }
}

impl<T, A: Allocator> List<Encoded<T>, A> {
  /// Expands a run-length coded list, with each count-value
  /// [`Encoded::Run`] becoming `count` values in a row. Any bare
  /// [`Encoded::Single`] element, or an expansion holding no values at all,
  /// makes the result `None`.

  pub fn decoded(&self) -> Option<List<T, A>>
  where
    T: Clone,
    A: Clone,
  {
    let mut values = Vec::new_in(self.allocator().clone());
    for element in self.iter() {
      match element {
        Encoded::Single(_) => return None,
        Encoded::Run(count, value) => {
          for _ in 0 .. *count {
            values.push(value.clone());
          }
        }
      }
    }
    List::new_in(values, self.allocator().clone())
  }
}

#[cfg(feature = "nonempty")]
impl<T> From<NonEmpty<T>> for List<T> {
  fn from(values: NonEmpty<T>) -> Self {
    Self::build_in(values.head, values.tail, Global)
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: fmt::Display, A: Allocator> fmt::Display for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("List(")?;
    for (i, value) in self.iter().enumerate() {
      if i != 0 {
        f.write_str(", ")?;
      }
      write!(f, "{}", value)?;
    }
    f.write_str(")")
  }
}

impl<T, U, A, B> PartialEq<List<U, B>> for List<T, A>
where
  T: PartialEq<U>,
  A: Allocator,
  B: Allocator,
{
  fn eq(&self, other: &List<U, B>) -> bool {
    self.iter().eq(other.iter())
  }
}

impl<T: Eq, A: Allocator> Eq for List<T, A> { }

impl<T, A: Allocator> IntoIterator for List<T, A> {
  type Item = T;
  type IntoIter = IntoIter<T, A>;

  #[inline(always)]
  fn into_iter(self) -> IntoIter<T, A> {
    IntoIter { slots: self.slots, cursor: Some(self.head) }
  }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline(always)]
  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Iter                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<&'a T> {
    let r = self.cursor?;
    let Slot::Occupied(node) = &self.slots[r.0] else { unreachable!() };
    self.cursor = node.next;
    Some(&node.value)
  }
}

// `derive` would demand `T: Clone`.

impl<'a, T> Clone for Iter<'a, T> {
  #[inline(always)]
  fn clone(&self) -> Self {
    Iter { slots: self.slots, cursor: self.cursor }
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// IntoIter                                                                   //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    let r = self.cursor?;
    let slot = mem::replace(&mut self.slots[r.0], Slot::Vacant { next_free: None });
    let Slot::Occupied(node) = slot else { unreachable!() };
    self.cursor = node.next;
    Some(node.value)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// MACROS                                                                     //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Builds a [`List`] in the global allocator from the given values, yielding
/// `None` for no values.
///
/// With no values, the element type must be known from context.

#[macro_export]
macro_rules! list {
  () => {
    $crate::List::new(::core::iter::empty())
  };
  ($($value:expr),+ $(,)?) => {
    $crate::List::new([$($value),+])
  };
}
