//! Function catalog. Each module defines a value function together with its
//! analytic gradient and Hessian companions (`*_grad`, `*_hess`).

pub mod booth;
pub mod exp_linear;
pub mod exp_linear_nd;
pub mod himmelblau;
pub mod matyas;
pub mod quartic_well;
pub mod rastrigin;
pub mod rosenbrock;
pub mod sphere;

pub use booth::*;
pub use exp_linear::*;
pub use exp_linear_nd::*;
pub use himmelblau::*;
pub use matyas::*;
pub use quartic_well::*;
pub use rastrigin::*;
pub use rosenbrock::*;
pub use sphere::*;
