// Reduce Operations
//
// Collapse the stored entries of a matrix or vector into one value with a
// monoid. Absent entries are the monoid's identity and are never visited.
//
// With a terminal monoid the fold stops at the first partial result equal to
// the terminal. Since the terminal dominates the operator, the truncated fold
// and the complete fold produce the same value.

use crate::core::binary_op::BinaryOp;
use crate::core::container::StoredEntries;
use crate::core::error::{GraphBlasError, Result};
use crate::core::monoid::Monoid;
use crate::core::scalar::Scalar;
use crate::ops::descriptor::Descriptor;
use crate::types::GraphBLASType;
use tracing::trace;

/// Outcome of a reduction
///
/// `had_entries == false` means nothing was stored, in which case `value`
/// is the monoid's identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction<T> {
    /// Reduced value
    pub value: T,
    /// Whether at least one stored entry contributed
    pub had_entries: bool,
}

impl<T: GraphBLASType> Reduction<T> {
    /// The result of reducing nothing
    pub fn empty(monoid: &Monoid<T>) -> Self {
        Self {
            value: monoid.identity(),
            had_entries: false,
        }
    }

    /// Combine two partial results of the same monoid
    ///
    /// Partials may come from disjoint chunks folded in any order. A partial
    /// already at the terminal is returned as is without invoking the
    /// operator.
    pub fn combine(self, other: Self, monoid: &Monoid<T>) -> Self {
        self.combine_with(other, monoid, true)
    }

    // With `check_terminal` off, two non-empty partials always go through
    // the operator, matching a complete fold even for a non-dominating
    // terminal.
    fn combine_with(self, other: Self, monoid: &Monoid<T>, check_terminal: bool) -> Self {
        match (self.had_entries, other.had_entries) {
            (_, false) => self,
            (false, true) => other,
            (true, true) => {
                if check_terminal && monoid.is_terminal(self.value) {
                    self
                } else if check_terminal && monoid.is_terminal(other.value) {
                    other
                } else {
                    Self {
                        value: monoid.apply(self.value, other.value),
                        had_entries: true,
                    }
                }
            }
        }
    }
}

/// Combine any number of partial results, stopping at the terminal
pub fn combine_partials<T, I>(monoid: &Monoid<T>, partials: I) -> Reduction<T>
where
    T: GraphBLASType,
    I: IntoIterator<Item = Reduction<T>>,
{
    let mut total = Reduction::empty(monoid);
    for partial in partials {
        total = total.combine(partial, monoid);
        if total.had_entries && monoid.is_terminal(total.value) {
            break;
        }
    }
    total
}

/// Running state of one fold
struct Fold<T> {
    reduction: Reduction<T>,
    visited: usize,
    terminal_hit: bool,
}

fn fold<T, I>(monoid: &Monoid<T>, values: I, terminal_exit: bool) -> Fold<T>
where
    T: GraphBLASType,
    I: IntoIterator<Item = T>,
{
    let check_terminal = terminal_exit && monoid.terminal().is_some();
    let mut acc = monoid.identity();
    let mut visited = 0;

    for value in values {
        acc = monoid.apply(acc, value);
        visited += 1;
        if check_terminal && monoid.is_terminal(acc) {
            return Fold {
                reduction: Reduction {
                    value: acc,
                    had_entries: true,
                },
                visited,
                terminal_hit: true,
            };
        }
    }

    Fold {
        reduction: Reduction {
            value: acc,
            had_entries: visited > 0,
        },
        visited,
        terminal_hit: false,
    }
}

// Chunks are drawn from one shared iterator, so a chunk that stops early
// leaves its remainder to the next chunk. That only matters when the
// combined partial is not yet terminal, and then nothing was skipped.
fn fold_chunked<T, I>(monoid: &Monoid<T>, values: I, chunk: usize, terminal_exit: bool) -> Fold<T>
where
    T: GraphBLASType,
    I: Iterator<Item = T>,
{
    let mut values = values;
    let mut total = Fold {
        reduction: Reduction::empty(monoid),
        visited: 0,
        terminal_hit: false,
    };

    loop {
        let part = fold(monoid, values.by_ref().take(chunk), terminal_exit);
        if part.visited == 0 {
            break;
        }
        total.visited += part.visited;
        total.reduction = total
            .reduction
            .combine_with(part.reduction, monoid, terminal_exit);
        if terminal_exit && monoid.is_terminal(total.reduction.value) {
            total.terminal_hit = true;
            break;
        }
    }

    total
}

/// Reduce all stored entries of `source` to a single value
///
/// # Arguments
/// * `source` - Matrix, vector, or any other stored-entry source (read only)
/// * `monoid` - Reduction monoid, optionally with a terminal value
/// * `desc` - Optional descriptor
///
/// An empty source yields the identity with `had_entries == false`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(monoid = monoid.name(), nvals = source.nvals())
)]
pub fn reduce<T, S>(source: &S, monoid: &Monoid<T>, desc: Option<&Descriptor>) -> Result<Reduction<T>>
where
    T: GraphBLASType,
    S: StoredEntries<T> + ?Sized,
{
    let desc = desc.copied().unwrap_or_default();
    desc.validate_for_reduce()?;

    if source.type_code() != T::TYPE_CODE {
        return Err(GraphBlasError::type_mismatch(T::TYPE_CODE, source.type_code()));
    }

    let values = source.stored_values();
    let outcome = match desc.chunk {
        Some(chunk) => fold_chunked(monoid, values, chunk, desc.terminal_exit),
        None => fold(monoid, values, desc.terminal_exit),
    };

    if outcome.terminal_hit {
        trace!(visited = outcome.visited, "terminal value reached");
    } else {
        trace!(visited = outcome.visited, "full fold");
    }

    Ok(outcome.reduction)
}

/// Reduce into a Scalar: c = accum(c, reduce(source))
///
/// Without `accum`, `c` takes the result, or becomes empty when the source
/// has no entries. With `accum`, an empty `c` takes the result and an empty
/// source leaves `c` untouched.
pub fn reduce_to_scalar<T, S>(
    c: &mut Scalar<T>,
    accum: Option<&BinaryOp<T>>,
    monoid: &Monoid<T>,
    source: &S,
    desc: Option<&Descriptor>,
) -> Result<()>
where
    T: GraphBLASType,
    S: StoredEntries<T> + ?Sized,
{
    let result = reduce(source, monoid, desc)?;

    if !result.had_entries {
        if accum.is_none() {
            c.clear();
        }
        return Ok(());
    }

    let value = match (accum, c.get()) {
        (Some(op), Some(old)) => op.apply(old, result.value),
        _ => result.value,
    };
    c.set(value);
    Ok(())
}

/// Reduce into a plain value: c = accum(c, reduce(source))
///
/// An empty source reduces to the identity, which is then written or
/// accumulated like any other result.
pub fn reduce_to_value<T, S>(
    c: &mut T,
    accum: Option<&BinaryOp<T>>,
    monoid: &Monoid<T>,
    source: &S,
    desc: Option<&Descriptor>,
) -> Result<()>
where
    T: GraphBLASType,
    S: StoredEntries<T> + ?Sized,
{
    let result = reduce(source, monoid, desc)?;
    *c = match accum {
        Some(op) => op.apply(*c, result.value),
        None => result.value,
    };
    Ok(())
}
