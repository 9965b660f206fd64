//! Shared traits implemented by the tracker's records.

/// Exposes the opaque identifier assigned to a stored record.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Supplies the non-negative magnitude carried by a record.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts a record into a short label for logs and listings.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Returns the index of the record whose identifier equals `id`.
pub fn position_by_id<T: Identifiable>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Sums the amounts of every record yielded by `items`.
pub fn sum_amounts<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}
