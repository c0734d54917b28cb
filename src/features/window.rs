use crate::config::Sentinels;

/// Surrounds `values` with `width` start sentinels and `width` end sentinels.
///
/// The input is left untouched; padding lives only in the returned vector.
pub fn pad<'a>(values: &[&'a str], width: usize, sentinels: Sentinels) -> Vec<&'a str> {
    let mut padded = Vec::with_capacity(values.len() + 2 * width);
    padded.extend(std::iter::repeat(sentinels.start).take(width));
    padded.extend_from_slice(values);
    padded.extend(std::iter::repeat(sentinels.end).take(width));
    padded
}

/// Offsets of a symmetric window, from `-width` to `+width` inclusive.
pub fn offsets(width: usize) -> impl Iterator<Item = isize> {
    let width = width as isize;
    -width..=width
}

/// `(offset, value)` pairs around real position `index` of a sequence padded with [`pad`].
pub fn window<'p, 'a>(
    padded: &'p [&'a str],
    index: usize,
    width: usize,
) -> impl Iterator<Item = (isize, &'a str)> + 'p {
    // Real position `index` sits at `index + width` in the padded sequence.
    padded[index..=index + 2 * width]
        .iter()
        .zip(offsets(width))
        .map(|(value, offset)| (offset, *value))
}
