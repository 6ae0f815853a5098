/// Anything the carousel can flag as the currently shown element.
///
/// The controller only flips these flags; how "active" looks on screen is up to
/// the implementor.
pub trait ActiveMarker {
    fn mark_active(&mut self);
    fn mark_inactive(&mut self);
    fn is_active(&self) -> bool;
}
