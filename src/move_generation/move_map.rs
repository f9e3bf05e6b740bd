//! Source-square keyed move lists.
//!
//! A `MoveMap` is assembled once per generation pass through
//! `MoveMapBuilder` and afterwards only shrinks, when the legality filter
//! prunes it. Destinations keep generation order and may repeat.

use std::collections::BTreeMap;

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveMap {
    moves: BTreeMap<Square, Vec<Square>>,
}

impl MoveMap {
    #[inline]
    pub fn destinations(&self, from: Square) -> Option<&[Square]> {
        self.moves.get(&from).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains_source(&self, from: Square) -> bool {
        self.moves.contains_key(&from)
    }

    #[inline]
    pub fn contains_move(&self, from: Square, to: Square) -> bool {
        self.destinations(from).is_some_and(|targets| targets.contains(&to))
    }

    /// Number of source squares with at least one destination.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Total destinations across all sources, duplicates included.
    pub fn move_count(&self) -> usize {
        self.moves.values().map(Vec::len).sum()
    }

    pub fn sources(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Square])> + '_ {
        self.moves.iter().map(|(from, targets)| (*from, targets.as_slice()))
    }

    /// Every `(from, to)` pair in source order.
    pub fn pairs(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.iter()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    /// Keeps only the destinations for which `keep(from, to)` holds and drops
    /// sources left without any.
    pub fn retain_moves<F>(&mut self, mut keep: F)
    where
        F: FnMut(Square, Square) -> bool,
    {
        self.moves.retain(|from, targets| {
            targets.retain(|to| keep(*from, *to));
            !targets.is_empty()
        });
    }
}

/// Append-only collector for one generation pass.
#[derive(Debug, Default)]
pub struct MoveMapBuilder {
    moves: BTreeMap<Square, Vec<Square>>,
}

impl MoveMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, from: Square, to: Square) {
        self.moves.entry(from).or_default().push(to);
    }

    /// Adds all of `targets` under `from`; nothing is recorded when empty.
    pub fn extend(&mut self, from: Square, targets: &[Square]) {
        if targets.is_empty() {
            return;
        }
        self.moves.entry(from).or_default().extend_from_slice(targets);
    }

    pub fn finish(self) -> MoveMap {
        MoveMap { moves: self.moves }
    }
}
