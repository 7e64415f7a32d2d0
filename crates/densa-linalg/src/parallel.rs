//! Column-parallel drivers.
//!
//! Both drivers split a column-major buffer into disjoint column blocks with
//! `split_at_mut`/`par_chunks_mut`, so tasks never share a mutable element
//! and no locking is needed.

use rayon::prelude::*;

/// Recursively halves the column range of `product` until a block has at
/// most `threshold` columns, then calls `conquer(block, first_column)` on
/// the rayon pool. Blocks until every block is done.
pub(crate) fn divide_and_conquer<N, F>(
    product: &mut [N],
    rows: usize,
    first_column: usize,
    threshold: usize,
    conquer: &F,
) where
    N: Send,
    F: Fn(&mut [N], usize) + Sync,
{
    let columns = if rows == 0 { 0 } else { product.len() / rows };
    if columns <= threshold.max(1) {
        conquer(product, first_column);
        return;
    }
    let split = columns / 2;
    let (head, tail) = product.split_at_mut(split * rows);
    rayon::join(
        || divide_and_conquer(head, rows, first_column, threshold, conquer),
        || divide_and_conquer(tail, rows, first_column + split, threshold, conquer),
    );
}

/// Applies `op(column_index, column)` to every column of `columns`, in
/// parallel when there are more than `threshold` columns.
///
/// `columns` holds whole columns of height `rows`; the first of them has
/// index `first_column`.
pub(crate) fn for_each_column<N, F>(
    columns: &mut [N],
    rows: usize,
    first_column: usize,
    threshold: usize,
    op: F,
) where
    N: Send,
    F: Fn(usize, &mut [N]) + Sync + Send,
{
    if rows == 0 {
        return;
    }
    let count = columns.len() / rows;
    if count > threshold {
        log::trace!("column operation on {count} columns runs in parallel");
        columns
            .par_chunks_mut(rows)
            .enumerate()
            .for_each(|(offset, column)| op(first_column + offset, column));
    } else {
        columns
            .chunks_mut(rows)
            .enumerate()
            .for_each(|(offset, column)| op(first_column + offset, column));
    }
}
