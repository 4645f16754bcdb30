use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Typed handle into an [`Arena`].
pub trait ArenaId: Copy {
  fn from_index(index: usize) -> Self;
  fn index(self) -> usize;
}

macro_rules! arena_id {
  ( $( $(#[$meta:meta])* $name:ident ),* ) => {
    $(
      $(#[$meta])*
      #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
      pub struct $name(pub usize);

      impl std::fmt::Debug for $name {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
          write!(f, "{}({})", stringify!($name), self.0)
        }
      }

      impl $crate::utils::ArenaId for $name {
        fn from_index(index: usize) -> Self {
          $name(index)
        }
        fn index(self) -> usize {
          self.0
        }
      }
    )*
  };
}
pub(crate) use arena_id;

///////////////////////////////////////////////////////////////////////////////
// Arena

// Slots are never reused: a removed entry leaves a tombstone behind so that
// handles stay unambiguous until the arena is cleared.
#[derive(Debug, Clone)]
pub struct Arena<I, T> {
  slots: Vec<Option<T>>,
  live: usize,
  _id: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
  fn default() -> Self {
    Arena::new()
  }
}

impl<I: ArenaId, T> Arena<I, T> {
  pub fn new() -> Arena<I, T> {
    Arena {
      slots: Vec::new(),
      live: 0,
      _id: PhantomData,
    }
  }

  pub fn push(&mut self, elt: T) -> I {
    let idx = self.slots.len();
    self.slots.push(Some(elt));
    self.live += 1;
    I::from_index(idx)
  }

  pub fn remove(&mut self, id: I) -> Option<T> {
    let ret = self.slots.get_mut(id.index())?.take();
    if ret.is_some() {
      self.live -= 1;
    }
    ret
  }

  pub fn get(&self, id: I) -> Option<&T> {
    self.slots.get(id.index())?.as_ref()
  }

  pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
    self.slots.get_mut(id.index())?.as_mut()
  }

  pub fn contains(&self, id: I) -> bool {
    self.get(id).is_some()
  }

  /// Number of live entries.
  pub fn len(&self) -> usize {
    self.live
  }

  /// Number of handles ever issued, live or not.
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  pub fn clear(&mut self) {
    self.slots.clear();
    self.live = 0;
  }

  pub fn iter(&self) -> impl Iterator<Item = (I, &T)> + '_ {
    self
      .slots
      .iter()
      .enumerate()
      .filter_map(|(idx, slot)| slot.as_ref().map(|elt| (I::from_index(idx), elt)))
  }

  pub fn iter_mut(&mut self) -> impl Iterator<Item = (I, &mut T)> + '_ {
    self
      .slots
      .iter_mut()
      .enumerate()
      .filter_map(|(idx, slot)| slot.as_mut().map(|elt| (I::from_index(idx), elt)))
  }

  pub fn ids(&self) -> impl Iterator<Item = I> + '_ {
    self.iter().map(|(id, _)| id)
  }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
  type Output = T;
  fn index(&self, id: I) -> &T {
    match self.get(id) {
      Some(elt) => elt,
      None => panic!("stale arena handle: {}", id.index()),
    }
  }
}

impl<I: ArenaId, T> IndexMut<I> for Arena<I, T> {
  fn index_mut(&mut self, id: I) -> &mut T {
    match self.get_mut(id) {
      Some(elt) => elt,
      None => panic!("stale arena handle: {}", id.index()),
    }
  }
}
