#![warn(clippy::pedantic)]

use std::cell::RefCell;

use log::trace;
use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use tessera_math::vector::Vector3r;
use tessera_math::Real;

thread_local! {
    static THREAD_RANDOM: RefCell<Random> = RefCell::new({
        trace!("Seeding random generator for {:?}", std::thread::current().id());
        Random::new()
    });
}

/// Small, fast, non-cryptographic random source.
#[derive(Debug, Clone)]
pub struct Random {
    rng: Pcg64Mcg,
}

impl Random {
    /// Seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_os_rng(),
        }
    }

    /// The same seed always yields the same sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Calls `f` with this thread's instance, created on first use.
    ///
    /// # Panics
    ///
    /// If `f` calls `with_thread_local` again.
    pub fn with_thread_local<R>(f: impl FnOnce(&mut Random) -> R) -> R {
        THREAD_RANDOM.with(|random| f(&mut random.borrow_mut()))
    }

    /// Uniform in `[min_inclusive, max_exclusive)`.
    ///
    /// # Panics
    ///
    /// If `min_inclusive >= max_exclusive`.
    pub fn float_in_range(&mut self, min_inclusive: Real, max_exclusive: Real) -> Real {
        self.rng.random_range(min_inclusive..max_exclusive)
    }

    /// Uniform in `[0, 1)`.
    pub fn float(&mut self) -> Real {
        self.rng.random()
    }

    /// Uniform in `[min_inclusive, max_inclusive]`.
    ///
    /// # Panics
    ///
    /// If `min_inclusive > max_inclusive`.
    pub fn int_in_range<T>(&mut self, min_inclusive: T, max_inclusive: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.random_range(min_inclusive..=max_inclusive)
    }

    /// Uniform point in the unit disk of the XY plane.
    pub fn in_xy_unit_disk(&mut self) -> Vector3r {
        loop {
            let position = Vector3r::new(
                self.float_in_range(-1.0, 1.0),
                self.float_in_range(-1.0, 1.0),
                0.0,
            );
            if position.length2() < 1.0 {
                return position;
            }
        }
    }

    /// Uniform point in the unit ball.
    pub fn in_unit_sphere(&mut self) -> Vector3r {
        loop {
            let position = Vector3r::new(
                self.float_in_range(-1.0, 1.0),
                self.float_in_range(-1.0, 1.0),
                self.float_in_range(-1.0, 1.0),
            );
            if position.length2() < 1.0 {
                return position;
            }
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
