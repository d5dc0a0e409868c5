use crate::set::{Construct, Set};

/// Returns a new set containing all the elements of `s` and `t`.
pub fn union<T, S>(s: &S, t: &S) -> S
where
    S: Set<T> + Construct,
{
    let mut result = S::with_capacity(s.len() + t.len());
    for value in s.values() {
        result.insert(value);
    }
    for value in t.values() {
        result.insert(value);
    }
    result
}

/// Returns a new set containing the elements that are in both `s` and `t`.
pub fn intersection<T, S>(s: &S, t: &S) -> S
where
    S: Set<T> + Construct,
{
    // Iterate the smaller operand and probe the larger, which minimizes the
    // number of `contains` calls.
    let (scan, probe) = if s.len() < t.len() { (s, t) } else { (t, s) };
    let mut result = S::with_capacity(scan.len());
    for value in scan.values() {
        if probe.contains(&value) {
            result.insert(value);
        }
    }
    result
}

/// Returns a new set containing the elements that are in `s` but not `t`.
pub fn difference<T, S>(s: &S, t: &S) -> S
where
    S: Set<T> + Construct,
{
    let mut result = S::with_capacity(s.len());
    for value in s.values() {
        if !t.contains(&value) {
            result.insert(value);
        }
    }
    result
}

/// Returns a new set containing the elements in `s` that are not in `t` and
/// the elements in `t` that are not in `s`.
pub fn symmetric_difference<T, S>(s: &S, t: &S) -> S
where
    S: Set<T> + Construct,
{
    let mut result = S::with_capacity(s.len() + t.len());
    for value in s.values() {
        if !t.contains(&value) {
            result.insert(value);
        }
    }
    for value in t.values() {
        if !s.contains(&value) {
            result.insert(value);
        }
    }
    result
}
