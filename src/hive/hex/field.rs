use std::collections::{hash_map::Entry as MapEntry, HashMap, HashSet};

use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A set of height-sensitive columns useful for performing reachability calculations.
pub struct Field
{
    map: HashMap<Column, u8>,
}

impl FromIterator<Column> for Field
{
    fn from_iter<T: IntoIterator<Item = Column>>(iter: T) -> Self
    {
        let map: HashMap<Column, u8> = iter.into_iter().map(|c| (c, 1)).collect();
        Field { map }
    }
}

impl From<Field> for HashSet<Column>
{
    fn from(value: Field) -> Self
    {
        value.map.keys().copied().collect()
    }
}

impl Field
{
    /// Determines whether this column is occupied.
    pub fn contains(&self, c: Column) -> bool
    {
        self.map.contains_key(&c)
    }

    /// Ensures that the two columns are neighbours, and returns their common neighbours.
    pub fn ensure_common_neighbours(&self, from: Column, to: Column) -> Result<(Column, Column)>
    {
        let Some((cw, ccw)) = hex::common_neighbours(from, to)
        else
        {
            return Err(Error::new(
                Kind::InvalidState,
                format!("Column {:?} and column {:?} are not neighbours.", from, to),
            ));
        };

        Ok((cw, ccw))
    }

    /// Boolean of the above.
    pub fn ensure_common_neighbours_satisfied(&self, from: Column, to: Column) -> Option<(Column, Column)>
    {
        hex::common_neighbours(from, to)
    }

    /// Ensures that a movement between two columns satisfies the constant-contact ("slide") rule.
    ///
    /// True when the columns are neighbours and either a ground-level movement has a common
    /// occupied neighbour, or one column is elevated (climbing keeps contact through the stack).
    ///
    /// `ghosting` tells the check to assume the mover already occupies one extra height at
    /// `from`/`to` respectively, for use while still "standing" on its source column.
    pub fn ensure_constant_contact(&self, from: Column, to: Column, ghosting: bool) -> Result<()>
    {
        let base = Error::new(
            Kind::ConstantContact,
            format!("Moving from {:?} to {:?} violates the constant contact principle.", from, to),
        );

        let (cw, ccw) = self.ensure_common_neighbours(from, to).map_err(|err| err.chain(base.clone()))?;

        let ghost = if ghosting { 1 } else { 0 };
        let height_f = self.height(from).unwrap_or(1) + ghost;
        let height_t = self.height(to).map(|h| h + 1).unwrap_or(1);

        if height_f.max(height_t) > 1
        {
            Ok(())
        }
        else if !(self.contains(cw) || self.contains(ccw))
        {
            let err = Error::new(Kind::InvalidState, format!("Neither common neighbour, {:?} or {:?}, is in the hive.", cw, ccw));
            Err(err.chain(base))
        }
        else
        {
            Ok(())
        }
    }

    /// Boolean of the above.
    pub fn ensure_constant_contact_satisfied(&self, from: Column, to: Column, ghosting: bool) -> bool
    {
        let Some((cw, ccw)) = self.ensure_common_neighbours_satisfied(from, to)
        else
        {
            return false;
        };

        let ghost = if ghosting { 1 } else { 0 };
        let height_f = self.height(from).unwrap_or(1) + ghost;
        let height_t = self.height(to).map(|h| h + 1).unwrap_or(1);

        height_f.max(height_t) > 1 || self.contains(cw) || self.contains(ccw)
    }

    /// Ensures that a movement between two columns satisfies the freedom-to-move ("gate") rule.
    pub fn ensure_freedom_to_move(&self, from: Column, to: Column, ghosting: bool) -> Result<()>
    {
        let base = Error::new(
            Kind::FreedomToMove,
            format!("Moving from {:?} to {:?} violates the freedom to move principle.", from, to),
        );

        let (cw, ccw) = self.ensure_common_neighbours(from, to).map_err(|err| err.chain(base.clone()))?;

        if self.contains(cw) && self.contains(ccw)
        {
            let height_cw = self.height(cw).unwrap();
            let height_ccw = self.height(ccw).unwrap();

            let ghost = if ghosting { 1 } else { 0 };
            let height_f = self.height(from).unwrap_or(1) + ghost;
            let height_t = self.height(to).map(|h| h + 1).unwrap_or(1);

            let height_path = height_f.max(height_t);
            let height_gate = height_cw.min(height_ccw);

            if height_gate >= height_path
            {
                let err = Error::new(
                    Kind::InvalidState,
                    format!(
                        "Neighbouring columns form a gate at least {} bugs tall, which blocks movement at height {}.",
                        height_gate, height_path
                    ),
                );
                Err(err.chain(base))
            }
            else
            {
                Ok(())
            }
        }
        else
        {
            Ok(())
        }
    }

    /// Boolean of the above.
    pub fn ensure_freedom_to_move_satisfied(&self, from: Column, to: Column, ghosting: bool) -> bool
    {
        let Some((cw, ccw)) = self.ensure_common_neighbours_satisfied(from, to)
        else
        {
            return false;
        };

        if self.contains(cw) && self.contains(ccw)
        {
            let height_cw = self.height(cw).unwrap();
            let height_ccw = self.height(ccw).unwrap();

            let ghost = if ghosting { 1 } else { 0 };
            let height_f = self.height(from).unwrap_or(1) + ghost;
            let height_t = self.height(to).map(|h| h + 1).unwrap_or(1);

            let height_path = height_f.max(height_t);
            let height_gate = height_cw.min(height_ccw);

            height_gate < height_path
        }
        else
        {
            false
        }
    }

    /// Ensures an ant- or spider-style crawl of the given exact length (or unbounded, for the ant) is possible.
    pub fn ensure_perimeter_crawl(&self, from: Column, to: Column, distance: Option<u8>) -> Result<()>
    {
        if !self.find_crawls(from, distance).contains(&to)
        {
            let msg = match distance
            {
                | Some(limit) => format!("Column {:?} is not reachable in exactly {} steps.", to, limit),
                | None => format!("Column {:?} is not reachable.", to),
            };
            Err(Error::new(Kind::LogicError, msg))
        }
        else
        {
            Ok(())
        }
    }

    /// Boolean of the above.
    pub fn ensure_perimeter_crawl_satisfied(&self, from: Column, to: Column, distance: Option<u8>) -> bool
    {
        self.find_crawls(from, distance).contains(&to)
    }

    /// Returns all ground columns reachable by crawling, either some exact number of steps or any number.
    pub fn find_crawls(&self, from: Column, distance: Option<u8>) -> HashSet<Column>
    {
        let perimeter = self.perimeter(Some(from));

        match distance
        {
            | Some(length) => perimeter.exact_distance(from, length),
            | None => perimeter.reachable(from),
        }
    }

    /// Gets the height of the given column, if occupied.
    pub fn height(&self, c: Column) -> Option<u8>
    {
        self.map.get(&c).copied()
    }

    /// Determines whether the field is empty.
    pub fn is_empty(&self) -> bool
    {
        self.map.is_empty()
    }

    /// Determines whether the column is locked behind a gate (5 or 6 occupied neighbours).
    pub fn is_gated(&self, c: Column) -> bool
    {
        self.neighbours(c).len() >= 5
    }

    /// Gets the number of occupied columns.
    pub fn len(&self) -> usize
    {
        self.map.len()
    }

    /// Returns the occupied neighbours of the given column.
    pub fn neighbours(&self, c: Column) -> HashSet<Column>
    {
        hex::neighbours(c).into_iter().filter(|c| self.contains(*c)).collect()
    }

    /// Returns the field consisting of the perimeter: every empty column adjacent to at
    /// least one occupied column and not locked behind a gate.
    pub fn perimeter(&self, as_if_without: Option<Column>) -> Perimeter
    {
        let mut field = self.clone();
        if let Some(c) = as_if_without
        {
            field.pop(c);
        }

        let perim: Field = field
            .map
            .keys()
            .flat_map(|c| hex::neighbours(*c))
            .filter(|c| !field.contains(*c) && !field.is_gated(*c))
            .collect();

        Perimeter(perim, field)
    }

    /// Removes one occupant from a column.
    pub fn pop(&mut self, c: Column)
    {
        if let MapEntry::Occupied(mut o) = self.map.entry(c)
        {
            if *o.get() == 1u8
            {
                o.remove_entry();
            }
            else
            {
                *o.get_mut() -= 1;
            }
        }
    }

    /// Adds an occupant to a column.
    pub fn push(&mut self, c: Column)
    {
        *self.map.entry(c).or_insert(0) += 1;
    }
}

// An iterative implementation of Tarjan's algorithm for finding articulation points
// (cut vertices), using an explicit stack rather than recursion.

impl Field
{
    /// Returns every column whose top piece cannot be lifted without disconnecting the hive.
    pub fn find_pins(&self) -> HashSet<Column>
    {
        let mut pinned = HashSet::new();

        let Some(&start) = self.map.keys().next()
        else
        {
            return pinned;
        };

        let mut visited: HashSet<Column> = HashSet::new();
        let mut disc: HashMap<Column, u32> = HashMap::new();
        let mut low: HashMap<Column, u32> = HashMap::new();
        let mut parent: HashMap<Column, Option<Column>> = HashMap::new();
        let mut children: HashMap<Column, u32> = HashMap::new();
        let mut counter: u32 = 0;

        struct Frame
        {
            node:       Column,
            neighbours: Vec<Column>,
            next:       usize,
        }

        visited.insert(start);
        disc.insert(start, counter);
        low.insert(start, counter);
        parent.insert(start, None);
        counter += 1;

        let mut stack = vec![Frame {
            node:       start,
            neighbours: self.neighbours(start).into_iter().collect(),
            next:       0,
        }];

        while let Some(frame) = stack.last_mut()
        {
            if frame.next < frame.neighbours.len()
            {
                let node = frame.node;
                let candidate = frame.neighbours[frame.next];
                frame.next += 1;

                if parent.get(&node).copied().flatten() == Some(candidate)
                {
                    continue;
                }

                if visited.contains(&candidate)
                {
                    let low_node = *low.get(&node).unwrap();
                    let disc_candidate = *disc.get(&candidate).unwrap();
                    low.insert(node, low_node.min(disc_candidate));
                }
                else
                {
                    visited.insert(candidate);
                    disc.insert(candidate, counter);
                    low.insert(candidate, counter);
                    counter += 1;
                    parent.insert(candidate, Some(node));
                    *children.entry(node).or_insert(0) += 1;

                    stack.push(Frame {
                        node:       candidate,
                        neighbours: self.neighbours(candidate).into_iter().collect(),
                        next:       0,
                    });
                }
            }
            else
            {
                let finished = stack.pop().unwrap();
                let node = finished.node;

                if let Some(Some(par)) = parent.get(&node).copied()
                {
                    let low_node = *low.get(&node).unwrap();
                    let low_par = *low.get(&par).unwrap();
                    low.insert(par, low_par.min(low_node));

                    let disc_par = *disc.get(&par).unwrap();
                    let is_root = parent.get(&par).copied().flatten().is_none();
                    if !is_root && low_node >= disc_par
                    {
                        pinned.insert(par);
                    }
                }
            }
        }

        if *children.get(&start).unwrap_or(&0) > 1
        {
            pinned.insert(start);
        }

        pinned
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A field that was specifically constructed from a perimeter.
///
/// The perimeter contains every column that:
/// 1. is unoccupied;
/// 2. has at least one occupied neighbouring column; and
/// 3. has fewer than 5 occupied neighbours (is not locked behind a gate).
pub struct Perimeter(pub Field, pub Field);

impl From<Perimeter> for Field
{
    fn from(value: Perimeter) -> Self
    {
        value.1
    }
}

impl From<Field> for Perimeter
{
    fn from(value: Field) -> Self
    {
        value.perimeter(None)
    }
}

#[derive(Default)]
struct PathRecord
{
    visited:        HashSet<Column>,
    reached:        HashSet<Column>,
    depth:          u8,
}

// Recursive DFS for bounded-length and unbounded reachability along the perimeter.
// Path lengths here are bounded by a spider's fixed 3-step walk or an ant's
// perimeter-sized crawl, so stack depth never approaches the concern that
// motivates the explicit-stack articulation search above.

impl Perimeter
{
    /// Returns every column in the perimeter reachable by a non-backtracking path of exactly `length` steps.
    pub fn exact_distance(&self, from: Column, length: u8) -> HashSet<Column>
    {
        if self.0.contains(from)
        {
            let mut state = PathRecord {
                depth: length,
                ..Default::default()
            };
            state.visited.insert(from);
            self.exact_distance_recurse(from, &mut state);
            state.reached
        }
        else
        {
            HashSet::new()
        }
    }

    /// Returns every column in the perimeter reachable from `from` by any number of steps.
    ///
    /// `from` itself is never reachable from itself, since no legal Hive movement is cyclic.
    pub fn reachable(&self, from: Column) -> HashSet<Column>
    {
        if self.0.contains(from)
        {
            let mut state = PathRecord::default();
            self.reachable_recurse(from, &mut state);
            state.visited.remove(&from);
            state.visited
        }
        else
        {
            HashSet::new()
        }
    }

    fn exact_distance_recurse(&self, column: Column, state: &mut PathRecord)
    {
        if state.depth == 0
        {
            state.reached.insert(column);
            return;
        }

        for neighbour in self.0.neighbours(column)
        {
            if state.visited.contains(&neighbour)
                || self.1.ensure_freedom_to_move(column, neighbour, false).is_err()
                || self.1.ensure_constant_contact(column, neighbour, false).is_err()
            {
                continue;
            }

            state.depth -= 1;
            state.visited.insert(neighbour);
            self.exact_distance_recurse(neighbour, state);
            state.visited.remove(&neighbour);
            state.depth += 1;
        }
    }

    fn reachable_recurse(&self, from: Column, state: &mut PathRecord)
    {
        state.visited.insert(from);

        for neighbour in self.0.neighbours(from)
        {
            if !state.visited.contains(&neighbour)
                && self.1.ensure_freedom_to_move(from, neighbour, false).is_ok()
                && self.1.ensure_constant_contact(from, neighbour, false).is_ok()
            {
                self.reachable_recurse(neighbour, state);
            }
        }
    }
}
