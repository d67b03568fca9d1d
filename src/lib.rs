//! Fixed-size linear algebra and color science.
//!
//! ```
//! use tessera::math::quaternion::Quaternion;
//! use tessera::math::vector::{GLOBAL_FORWARD, GLOBAL_RIGHT, GLOBAL_UP};
//!
//! let yaw = Quaternion::from_axis_angle(&GLOBAL_UP, tessera::math::scalar::HALF_PI);
//! let turned = yaw * GLOBAL_RIGHT;
//! assert!((turned - GLOBAL_FORWARD).length() < 1e-6);
//! ```

pub use tessera_color as color;
pub use tessera_math as math;
pub use tessera_random as random;
