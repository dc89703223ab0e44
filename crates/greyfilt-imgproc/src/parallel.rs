use rayon::prelude::*;

/// Fill each row of `dst` in parallel, passing the row index and the row slice to `f`.
///
/// `dst` is split into rows of `cols` elements. Empty rows are a no-op.
pub fn par_iter_rows_indexed<T>(dst: &mut [T], cols: usize, f: impl Fn(usize, &mut [T]) + Send + Sync)
where
    T: Send,
{
    if cols == 0 {
        return;
    }

    dst.par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(row, dst_row)| f(row, dst_row));
}

/// Apply a function to each pixel of `src` writing into `dst`, in parallel by rows.
///
/// PRECONDITION: `src` and `dst` have the same length.
pub fn par_iter_rows_val<T1, T2>(
    src: &[T1],
    dst: &mut [T2],
    cols: usize,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Sync,
    T2: Send,
{
    if cols == 0 {
        return;
    }

    src.par_chunks_exact(cols)
        .zip(dst.par_chunks_exact_mut(cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .iter()
                .zip(dst_chunk.iter_mut())
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each pair of pixels of `src1` and `src2`, in parallel by rows.
///
/// PRECONDITION: `src1`, `src2` and `dst` have the same length.
pub fn par_iter_rows_val_two<T1, T2, T3>(
    src1: &[T1],
    src2: &[T2],
    dst: &mut [T3],
    cols: usize,
    f: impl Fn(&T1, &T2, &mut T3) + Send + Sync,
) where
    T1: Sync,
    T2: Sync,
    T3: Send,
{
    if cols == 0 {
        return;
    }

    src1.par_chunks_exact(cols)
        .zip(src2.par_chunks_exact(cols))
        .zip(dst.par_chunks_exact_mut(cols))
        .for_each(|((src1_chunk, src2_chunk), dst_chunk)| {
            src1_chunk
                .iter()
                .zip(src2_chunk.iter())
                .zip(dst_chunk.iter_mut())
                .for_each(|((src1_pixel, src2_pixel), dst_pixel)| {
                    f(src1_pixel, src2_pixel, dst_pixel);
                });
        });
}
