/// A section counts as current this many pixels before its top reaches the viewport.
pub const SCROLL_SPY_LOOKAHEAD: f64 = 200.0;

/// Returns the id of the deepest section whose top has been scrolled past.
///
/// Sections are visited in document order and the last one with
/// `top <= scroll_y + lookahead` wins, so zero-height sections still qualify
/// and ties go to the later section.
pub fn current_section<'a, I>(sections: I, scroll_y: f64, lookahead: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let threshold = scroll_y + lookahead;

    sections
        .into_iter()
        .filter(|(_, top)| *top <= threshold)
        .last()
        .map(|(id, _)| id)
}
