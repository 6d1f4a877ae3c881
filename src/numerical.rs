/// reduction of an n-th order scalar ODE to a first-order n-dimensional
/// system: the vector field adapter invoked once per stage, per step
pub mod vector_field;

/// fixed-step explicit Runge-Kutta IVP solvers (RK2 and RK4) sharing one
/// step-loop skeleton, selected by the RKMethod enum
pub mod RK_solvers;

/// secant root finder, consumed by the shooting driver through the narrow
/// find_root contract
pub mod secant;

/// shooting method for two-point BVP of second-order scalar ODE
pub mod ShootingBVP;

/// struct-style api for the fixed-step solvers with a boxed field function
/// and csv export of the computed trajectory
pub mod ODE_api;
