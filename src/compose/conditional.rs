//! Conditional application of a transformation in method-chain style.

/// Applies a transformation only when a condition holds.
///
/// Implemented for every sized type, so it can be dropped into any builder
/// chain without breaking it.
///
/// # Examples
///
/// ```
/// use fncomb::compose::ConditionalApply;
///
/// let is_admin = true;
/// let title = String::from("Dashboard")
///     .if_apply(is_admin, |title| title + " (admin)")
///     .if_apply(false, |title| title.to_uppercase());
///
/// assert_eq!(title, "Dashboard (admin)");
/// ```
pub trait ConditionalApply: Sized {
    /// Returns `function(self)` when `condition` is true, `self` otherwise.
    ///
    /// `function` is not called when `condition` is false.
    #[inline]
    #[must_use]
    fn if_apply<F>(self, condition: bool, function: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { function(self) } else { self }
    }
}

impl<T> ConditionalApply for T {}
