//! Enumerates every ordering of a short sequence.
//!
//! Orderings come out in index-lexicographic order: the first element of the
//! input heads the first (N-1)! orderings, and the very first ordering is the
//! input itself. Elements are positional; equal values are not merged.

/// All `items.len()!` orderings of `items`.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut out = Vec::with_capacity(factorial(items.len()));
    let mut remaining = items.to_vec();
    let mut prefix = Vec::with_capacity(items.len());
    permute_into(&mut remaining, &mut prefix, &mut out);
    out
}

fn permute_into<T: Clone>(remaining: &mut Vec<T>, prefix: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
    if remaining.is_empty() {
        out.push(prefix.clone());
        return;
    }
    for i in 0..remaining.len() {
        let item = remaining.remove(i);
        prefix.push(item);
        permute_into(remaining, prefix, out);
        if let Some(item) = prefix.pop() {
            remaining.insert(i, item);
        }
    }
}

pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}
