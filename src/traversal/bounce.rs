//! A minimal generic trampoline.
//!
//! A computation in continuation-passing style can return a [Bounce]
//! instead of calling its continuation: either the final result, or a
//! thunk computing the next bounce. [`Bounce::run()`] then evaluates the
//! thunks in a loop, so chains of continuation calls cost no native stack.

/// Deferred computation returning another [Bounce].
pub type Thunk<'a, R> = Box<dyn FnOnce() -> Bounce<'a, R> + 'a>;

/// Either a finished result or more work to do.
pub enum Bounce<'a, R> {
    /// Computation finished with this result
    Done(R),
    /// Computation continues with this thunk
    More(Thunk<'a, R>),
}

impl<'a, R> Bounce<'a, R> {
    /// Wraps a closure as the next step of a computation.
    pub fn more<F>(f: F) -> Self
    where
        F: FnOnce() -> Bounce<'a, R> + 'a,
    {
        Bounce::More(Box::new(f))
    }

    /// Returns `true` if this is a final result.
    pub fn is_done(&self) -> bool {
        matches!(self, Bounce::Done(_))
    }

    /// Evaluates thunks until a result is reached.
    ///
    /// # Example
    /// ```
    /// use trampwick::traversal::Bounce;
    ///
    /// fn count_down(n: u64, acc: u64) -> Bounce<'static, u64> {
    ///     if n == 0 {
    ///         Bounce::Done(acc)
    ///     } else {
    ///         Bounce::more(move || count_down(n - 1, acc + 1))
    ///     }
    /// }
    ///
    /// assert_eq!(count_down(1_000_000, 0).run(), 1_000_000);
    /// ```
    pub fn run(self) -> R {
        let mut bounce = self;
        loop {
            match bounce {
                Bounce::Done(result) => return result,
                Bounce::More(thunk) => bounce = thunk(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Cont<'a> = Box<dyn FnOnce(u128) -> Bounce<'a, u128> + 'a>;

    fn factorial_cps<'a>(n: u128, k: Cont<'a>) -> Bounce<'a, u128> {
        if n <= 1 {
            Bounce::more(move || k(1))
        } else {
            Bounce::more(move || factorial_cps(n - 1, Box::new(move |res: u128| Bounce::more(move || k(n * res)))))
        }
    }

    #[test]
    fn test_done_runs_to_itself() {
        let bounce: Bounce<'_, u8> = Bounce::Done(3);
        assert!(bounce.is_done());
        assert_eq!(bounce.run(), 3);
    }

    #[test]
    fn test_factorial_in_cps() {
        assert_eq!(factorial_cps(1, Box::new(Bounce::Done)).run(), 1);
        assert_eq!(factorial_cps(4, Box::new(Bounce::Done)).run(), 24);
        assert_eq!(factorial_cps(20, Box::new(Bounce::Done)).run(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_deep_continuation_chain() {
        // Far more bounces than a recursive CPS factorial would survive
        fn sum_cps<'a>(n: u64, k: Box<dyn FnOnce(u64) -> Bounce<'a, u64> + 'a>) -> Bounce<'a, u64> {
            if n == 0 {
                Bounce::more(move || k(0))
            } else {
                Bounce::more(move || sum_cps(n - 1, Box::new(move |res: u64| Bounce::more(move || k(n + res)))))
            }
        }
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| sum_cps(100_000, Box::new(Bounce::Done)).run())
            .unwrap();
        assert_eq!(handle.join().unwrap(), 5_000_050_000);
    }
}
