use std::hint;

pub(crate) trait OptionExtension<T> {
    /// Unwraps a value that the caller knows to be [`Some`]. A [`None`] hits [`unreachable!`] in
    /// debug builds and [`unreachable_unchecked`](hint::unreachable_unchecked) in release builds.
    ///
    /// # Safety
    /// The caller must guarantee that `self` is [`Some`].
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
