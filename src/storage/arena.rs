use std::{
    iter::Enumerate,
    marker::PhantomData,
    ops::{Index, IndexMut},
    slice,
};

use crate::core::id::IdType;

/// Owning storage of records addressed by integer ids.
///
/// Removing a record turns its slot into a hole which is remembered and
/// reused by a later insertion. Ids of the other records are never changed by
/// a removal, so they can be freely stored in adjacency lists and search
/// tables.
#[derive(Debug, Clone)]
pub struct Arena<I, T> {
    slots: Vec<Option<T>>,
    free: Vec<I>,
    len: usize,
    ty: PhantomData<fn() -> I>,
}

impl<I: IdType, T> Arena<I, T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
            ty: PhantomData,
        }
    }

    /// Stores the record and returns its id.
    pub fn insert(&mut self, value: T) -> I {
        self.len += 1;

        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.as_usize()].is_none());
                self.slots[id.as_usize()] = Some(value);
                id
            }
            None => {
                self.slots.push(Some(value));
                I::from_usize(self.slots.len() - 1)
            }
        }
    }

    /// Removes the record and returns it, or `None` if there is no record with
    /// given id (including the case that it was already removed).
    pub fn remove(&mut self, id: I) -> Option<T> {
        let value = self.slots.get_mut(id.as_usize())?.take()?;
        self.free.push(id);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: I) -> Option<&T> {
        self.slots.get(id.as_usize())?.as_ref()
    }

    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.slots.get_mut(id.as_usize())?.as_mut()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Upper bound on the ids of live records. Suitable as a size of arrays
    /// indexed by ids.
    pub fn bound(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, I, T> {
        Iter {
            inner: self.slots.iter().enumerate(),
            ty: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (I, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_mut().map(|value| (I::from_usize(index), value)))
    }
}

impl<I: IdType, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdType, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &Self::Output {
        match self.get(id) {
            Some(value) => value,
            None => panic!("record {id:?} does not exist"),
        }
    }
}

impl<I: IdType, T> IndexMut<I> for Arena<I, T> {
    fn index_mut(&mut self, id: I) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("record {id:?} does not exist"),
        }
    }
}

/// Iterator over live records of an [`Arena`] in the order of their ids.
pub struct Iter<'a, I, T> {
    inner: Enumerate<slice::Iter<'a, Option<T>>>,
    ty: PhantomData<fn() -> I>,
}

impl<'a, I: IdType, T> Iterator for Iter<'a, I, T> {
    type Item = (I, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find_map(|(index, slot)| slot.as_ref().map(|value| (I::from_usize(index), value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::id::EdgeId;

    use super::*;

    #[test]
    fn insert_and_get() {
        let mut arena = Arena::<EdgeId, &str>::new();

        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.bound(), 2);
    }

    #[test]
    fn remove_exactly_once() {
        let mut arena = Arena::<EdgeId, &str>::new();

        let a = arena.insert("a");

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.get(a), None);
    }

    #[test]
    fn remove_does_not_move_others() {
        let mut arena = Arena::<EdgeId, u32>::new();

        let ids = (0..5).map(|i| arena.insert(i)).collect::<Vec<_>>();
        arena.remove(ids[1]);
        arena.remove(ids[3]);

        assert_eq!(
            arena.iter().map(|(id, value)| (id, *value)).collect::<Vec<_>>(),
            vec![(ids[0], 0), (ids[2], 2), (ids[4], 4)]
        );
    }

    #[test]
    fn holes_are_reused() {
        let mut arena = Arena::<EdgeId, u32>::new();

        arena.insert(0);
        let hole = arena.insert(1);
        arena.insert(2);

        arena.remove(hole);
        let reused = arena.insert(3);

        assert_eq!(reused, hole);
        assert_eq!(arena.get(reused), Some(&3));
        assert_eq!(arena.bound(), 3);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn index_removed() {
        let mut arena = Arena::<EdgeId, u32>::new();

        let a = arena.insert(1);
        arena.remove(a);

        let _ = arena[a];
    }

    #[test]
    fn out_of_bounds() {
        let mut arena = Arena::<EdgeId, u32>::new();
        assert_eq!(arena.get(EdgeId::from(10)), None);
        assert_eq!(arena.remove(EdgeId::from(10)), None);
    }

    #[test]
    fn iter_mut_and_clear() {
        let mut arena = Arena::<EdgeId, u32>::new();

        let a = arena.insert(1);
        let b = arena.insert(2);
        arena.remove(a);

        for (_, value) in arena.iter_mut() {
            *value *= 10;
        }
        assert_eq!(arena.get(b), Some(&20));

        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.bound(), 0);
        assert_eq!(arena.insert(5), EdgeId::from(0));
    }
}
